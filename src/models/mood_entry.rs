use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One daily questionnaire submission (10 answers across five categories:
/// energy/mood, workload, social connection, physical, positive reinforcement).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub employee_id: i64,
    pub checkin_date: NaiveDate,
    pub energy_level: i32,
    pub feeling: String,
    pub demand_volume: String,
    pub blockers: Option<String>,
    pub work_life_disconnect: String,
    pub connection_level: i32,
    pub interaction_quality: String,
    pub sleep_quality: String,
    pub pause_status: String,
    pub small_win: Option<String>,
}

/// The privacy-preserving read shape: every questionnaire field, no identity.
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizedMoodEntry {
    pub id: i64,
    pub checkin_date: NaiveDate,
    pub energy_level: i32,
    pub feeling: String,
    pub demand_volume: String,
    pub blockers: Option<String>,
    pub work_life_disconnect: String,
    pub connection_level: i32,
    pub interaction_quality: String,
    pub sleep_quality: String,
    pub pause_status: String,
    pub small_win: Option<String>,
}

impl From<MoodEntry> for AnonymizedMoodEntry {
    fn from(e: MoodEntry) -> Self {
        Self {
            id: e.id,
            checkin_date: e.checkin_date,
            energy_level: e.energy_level,
            feeling: e.feeling,
            demand_volume: e.demand_volume,
            blockers: e.blockers,
            work_life_disconnect: e.work_life_disconnect,
            connection_level: e.connection_level,
            interaction_quality: e.interaction_quality,
            sleep_quality: e.sleep_quality,
            pause_status: e.pause_status,
            small_win: e.small_win,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMoodEntry {
    pub employee_id: i64,
    pub checkin_date: NaiveDate,

    #[validate(range(min = 1, max = 5, message = "Energy level must be 1-5"))]
    pub energy_level: i32,

    #[validate(length(min = 1, max = 50, message = "Feeling must be 1-50 characters"))]
    pub feeling: String,

    #[validate(length(min = 1, message = "Demand volume is required"))]
    pub demand_volume: String,

    #[validate(length(max = 250, message = "Blockers must be under 250 characters"))]
    pub blockers: Option<String>,

    #[validate(length(min = 1, message = "Work-life disconnect indicator is required"))]
    pub work_life_disconnect: String,

    #[validate(range(min = 1, max = 5, message = "Connection level must be 1-5"))]
    pub connection_level: i32,

    #[validate(length(min = 1, message = "Interaction quality is required"))]
    pub interaction_quality: String,

    #[validate(length(min = 1, message = "Sleep quality is required"))]
    pub sleep_quality: String,

    #[validate(length(min = 1, message = "Pause status is required"))]
    pub pause_status: String,

    #[validate(length(max = 250, message = "Small win must be under 250 characters"))]
    pub small_win: Option<String>,
}

impl NewMoodEntry {
    /// A check-in cannot be dated in the future.
    pub fn validate_date(&self, server_today: NaiveDate) -> Result<(), String> {
        if self.checkin_date > server_today {
            return Err("Check-in date cannot be in the future".into());
        }
        Ok(())
    }
}

/// Aggregated dashboard row: average energy and entry count per team.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct TeamMoodReport {
    pub team_id: i64,
    pub team_name: String,
    pub average_energy: f64,
    pub entry_count: i64,
}
