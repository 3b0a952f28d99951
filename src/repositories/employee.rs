use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};

use super::{EmployeeRepository, RepoError};

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, new: &NewEmployee) -> Result<Employee, RepoError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, email, password, hired_on, team_id, role_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.hired_on)
        .bind(new.team_id)
        .bind(new.role_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepoError> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepoError> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepoError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn update(&self, employee: &EmployeeUpdate) -> Result<Option<Employee>, RepoError> {
        let updated = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees SET
                name = $2, email = $3, password = $4,
                hired_on = $5, team_id = $6, role_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.password)
        .bind(employee.hired_on)
        .bind(employee.team_id)
        .bind(employee.role_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
