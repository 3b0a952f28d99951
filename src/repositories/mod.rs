//! Storage ports. Services depend on these traits only; the Postgres
//! implementations live alongside them and are the single place where
//! driver errors are translated into [`RepoError`].

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry, TeamMoodReport};
use crate::models::resource::{NewResource, Resource};
use crate::models::role::Role;
use crate::models::team::Team;

mod employee;
mod favorite;
mod mood_entry;
mod reference;
mod resource;

pub use employee::PgEmployeeRepository;
pub use favorite::PgFavoriteRepository;
pub use mood_entry::PgMoodEntryRepository;
pub use reference::{PgRoleRepository, PgTeamRepository};
pub use resource::PgResourceRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// An anticipated unique-constraint violation (duplicate email,
    /// duplicate check-in date, duplicate favorite pair).
    #[error("duplicate key")]
    Duplicate,

    #[error("storage error: {0}")]
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if matches!(db.kind(), ErrorKind::UniqueViolation) {
                return RepoError::Duplicate;
            }
        }
        RepoError::Storage(err)
    }
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn insert(&self, new: &NewEmployee) -> Result<Employee, RepoError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepoError>;
    async fn find_all(&self) -> Result<Vec<Employee>, RepoError>;
    async fn update(&self, employee: &EmployeeUpdate) -> Result<Option<Employee>, RepoError>;
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait MoodEntryRepository: Send + Sync {
    async fn insert(&self, new: &NewMoodEntry) -> Result<MoodEntry, RepoError>;
    async fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<Option<MoodEntry>, RepoError>;

    /// Full history, newest check-in first.
    async fn find_all(&self) -> Result<Vec<MoodEntry>, RepoError>;

    /// Per-team energy averages, highest average first.
    async fn team_averages(&self) -> Result<Vec<TeamMoodReport>, RepoError>;

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Records the pair; reports [`RepoError::Duplicate`] if it already exists.
    async fn link(&self, employee_id: i64, resource_id: i64) -> Result<(), RepoError>;
    async fn unlink(&self, employee_id: i64, resource_id: i64) -> Result<bool, RepoError>;

    /// Resources favorited by the employee, ordered by resource name.
    async fn list_for_employee(&self, employee_id: i64) -> Result<Vec<Resource>, RepoError>;

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn insert(&self, new: &NewResource) -> Result<Resource, RepoError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError>;
    async fn find_all(&self) -> Result<Vec<Resource>, RepoError>;
    async fn update(&self, resource: &Resource) -> Result<Option<Resource>, RepoError>;
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Team>, RepoError>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Role>, RepoError>;
}
