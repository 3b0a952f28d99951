use std::sync::Arc;

use crate::models::mood_entry::{AnonymizedMoodEntry, MoodEntry, NewMoodEntry, TeamMoodReport};
use crate::repositories::{EmployeeRepository, MoodEntryRepository, RepoError};

use super::access_control::{AccessPolicy, TeamScope};

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("access denied")]
    AccessDenied,

    #[error("a mood check-in already exists for this employee and date")]
    DuplicateEntry,

    #[error("no dashboard data available")]
    EmptyReport,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct MoodCheckinService {
    entries: Arc<dyn MoodEntryRepository>,
    employees: Arc<dyn EmployeeRepository>,
    policy: AccessPolicy,
}

impl MoodCheckinService {
    pub fn new(
        entries: Arc<dyn MoodEntryRepository>,
        employees: Arc<dyn EmployeeRepository>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            entries,
            employees,
            policy,
        }
    }

    /// One check-in per employee per day. Field ranges are validated at the
    /// transport layer; the date-uniqueness rule lives here and nowhere else.
    pub async fn submit(&self, new: NewMoodEntry) -> Result<MoodEntry, CheckinError> {
        let existing = self
            .entries
            .find_by_employee_and_date(new.employee_id, new.checkin_date)
            .await?;

        if existing.is_some() {
            return Err(CheckinError::DuplicateEntry);
        }

        match self.entries.insert(&new).await {
            Ok(entry) => Ok(entry),
            // Two concurrent submissions can both pass the check above; the
            // storage unique constraint decides the loser.
            Err(RepoError::Duplicate) => Err(CheckinError::DuplicateEntry),
            Err(other) => Err(other.into()),
        }
    }

    /// Full history with employee identity. HR only.
    pub async fn raw_history(&self, actor_id: i64) -> Result<Vec<MoodEntry>, CheckinError> {
        self.require_raw_access(actor_id).await?;
        Ok(self.entries.find_all().await?)
    }

    /// Full history with `employee_id` stripped from every record. Same gate
    /// as the raw read; the stripping happens here so it holds for any
    /// storage backend.
    pub async fn anonymized_history(
        &self,
        actor_id: i64,
    ) -> Result<Vec<AnonymizedMoodEntry>, CheckinError> {
        self.require_raw_access(actor_id).await?;
        let entries = self.entries.find_all().await?;
        Ok(entries.into_iter().map(AnonymizedMoodEntry::from).collect())
    }

    /// Per-team averages, filtered to what the actor's role may see.
    pub async fn team_report(&self, actor_id: i64) -> Result<Vec<TeamMoodReport>, CheckinError> {
        let actor = self
            .employees
            .find_by_id(actor_id)
            .await?
            .ok_or(CheckinError::AccessDenied)?;

        if !self.policy.can_view_dashboard(actor.role_id) {
            return Err(CheckinError::AccessDenied);
        }
        let scope = self
            .policy
            .visible_team_scope(actor.role_id, actor.team_id)
            .ok_or(CheckinError::AccessDenied)?;

        let mut reports = self.entries.team_averages().await?;
        if let TeamScope::Team(team_id) = scope {
            reports.retain(|r| r.team_id == team_id);
        }

        if reports.is_empty() {
            return Err(CheckinError::EmptyReport);
        }
        Ok(reports)
    }

    async fn require_raw_access(&self, actor_id: i64) -> Result<(), CheckinError> {
        match self.employees.find_by_id(actor_id).await? {
            Some(actor) if self.policy.can_view_raw_history(actor.role_id) => Ok(()),
            _ => Err(CheckinError::AccessDenied),
        }
    }
}
