use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::mood_entry::{MoodEntry, NewMoodEntry, TeamMoodReport};

use super::{MoodEntryRepository, RepoError};

pub struct PgMoodEntryRepository {
    pool: PgPool,
}

impl PgMoodEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodEntryRepository for PgMoodEntryRepository {
    async fn insert(&self, new: &NewMoodEntry) -> Result<MoodEntry, RepoError> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (
                employee_id, checkin_date, energy_level, feeling, demand_volume,
                blockers, work_life_disconnect, connection_level,
                interaction_quality, sleep_quality, pause_status, small_win
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(new.employee_id)
        .bind(new.checkin_date)
        .bind(new.energy_level)
        .bind(&new.feeling)
        .bind(&new.demand_volume)
        .bind(&new.blockers)
        .bind(&new.work_life_disconnect)
        .bind(new.connection_level)
        .bind(&new.interaction_quality)
        .bind(&new.sleep_quality)
        .bind(&new.pause_status)
        .bind(&new.small_win)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<Option<MoodEntry>, RepoError> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries WHERE employee_id = $1 AND checkin_date = $2",
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<MoodEntry>, RepoError> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries ORDER BY checkin_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn team_averages(&self) -> Result<Vec<TeamMoodReport>, RepoError> {
        let reports = sqlx::query_as::<_, TeamMoodReport>(
            r#"
            SELECT
                t.id AS team_id,
                t.name AS team_name,
                AVG(m.energy_level)::float8 AS average_energy,
                COUNT(m.id) AS entry_count
            FROM mood_entries m
            JOIN employees e ON m.employee_id = e.id
            JOIN teams t ON e.team_id = t.id
            GROUP BY t.id, t.name
            ORDER BY average_energy DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM mood_entries WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
