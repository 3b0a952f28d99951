use std::sync::Arc;

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::repositories::{
    EmployeeRepository, FavoriteRepository, MoodEntryRepository, RepoError,
};

use super::access_control::AccessPolicy;

#[derive(Debug, thiserror::Error)]
pub enum EmployeeError {
    #[error("access denied")]
    AccessDenied,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("employee not found")]
    NotFound,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    entries: Arc<dyn MoodEntryRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    policy: AccessPolicy,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        entries: Arc<dyn MoodEntryRepository>,
        favorites: Arc<dyn FavoriteRepository>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            employees,
            entries,
            favorites,
            policy,
        }
    }

    /// HR-gated creation with email uniqueness.
    pub async fn register(
        &self,
        new: NewEmployee,
        actor_id: i64,
    ) -> Result<Employee, EmployeeError> {
        let authorized = match self.employees.find_by_id(actor_id).await? {
            Some(actor) => self.policy.can_register_employee(actor.role_id),
            None => false,
        };
        if !authorized {
            return Err(EmployeeError::AccessDenied);
        }

        if self.employees.find_by_email(&new.email).await?.is_some() {
            return Err(EmployeeError::DuplicateEmail);
        }

        match self.employees.insert(&new).await {
            Ok(employee) => {
                tracing::info!(employee_id = employee.id, "employee registered");
                Ok(employee)
            }
            // Concurrent registration with the same email; the unique index
            // on employees.email is the backstop.
            Err(RepoError::Duplicate) => Err(EmployeeError::DuplicateEmail),
            Err(other) => Err(other.into()),
        }
    }

    /// Exact email + credential match, or nothing. No token issuance.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Employee>, EmployeeError> {
        let found = self.employees.find_by_email(email).await?;
        Ok(found.filter(|e| credentials_match(&e.password, password)))
    }

    /// Re-checks email uniqueness, ignoring the employee's own row so a
    /// self-edit with an unchanged email is not rejected.
    pub async fn update(&self, update: EmployeeUpdate) -> Result<Employee, EmployeeError> {
        if let Some(existing) = self.employees.find_by_email(&update.email).await? {
            if existing.id != update.id {
                return Err(EmployeeError::DuplicateEmail);
            }
        }

        self.employees
            .update(&update)
            .await?
            .ok_or(EmployeeError::NotFound)
    }

    /// Manual cascade in fixed order: mood entries, favorite links, then the
    /// employee row. Not atomic; a failure mid-sequence leaves the earlier
    /// deletes in place (see DESIGN.md).
    pub async fn delete(&self, id: i64) -> Result<bool, EmployeeError> {
        let entries_removed = self.entries.delete_by_employee(id).await?;
        let links_removed = self.favorites.delete_by_employee(id).await?;
        let deleted = self.employees.delete(id).await?;

        tracing::debug!(
            employee_id = id,
            entries_removed,
            links_removed,
            deleted,
            "employee cascade delete finished"
        );
        Ok(deleted)
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.employees.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.employees.find_by_id(id).await?)
    }
}

/// Single choke-point for credential comparison. The store still holds the
/// legacy plaintext column; swap this comparison when hashed credentials land.
fn credentials_match(stored: &str, given: &str) -> bool {
    stored == given
}
