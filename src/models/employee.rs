use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub hired_on: NaiveDate,
    pub team_id: i64,
    pub role_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 254, message = "Email too long"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub hired_on: NaiveDate,
    pub team_id: i64,
    pub role_id: i64,
}

impl NewEmployee {
    /// Hire date cannot lie in the future.
    pub fn validate_hire_date(&self, server_today: NaiveDate) -> Result<(), String> {
        if self.hired_on > server_today {
            return Err("Hire date cannot be in the future".into());
        }
        Ok(())
    }
}

/// Full-row update; the id comes from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[serde(default)]
    pub id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub hired_on: NaiveDate,
    pub team_id: i64,
    pub role_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
