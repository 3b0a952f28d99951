use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::mood_entry::{AnonymizedMoodEntry, MoodEntry, NewMoodEntry, TeamMoodReport};
use crate::AppState;

pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<NewMoodEntry>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    body.validate()?;
    body.validate_date(Utc::now().date_naive())
        .map_err(AppError::Validation)?;

    let entry = state.checkins.submit(body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Raw audit history, employee identity included. HR only.
pub async fn raw_history(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let history = state.checkins.raw_history(actor_id).await?;
    if history.is_empty() {
        return Err(AppError::NotFound("No mood check-ins recorded".into()));
    }
    Ok(Json(history))
}

/// Same gate as the raw read, but every record is stripped of its
/// employee id before leaving the service layer.
pub async fn anonymized_history(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> AppResult<Json<Vec<AnonymizedMoodEntry>>> {
    let history = state.checkins.anonymized_history(actor_id).await?;
    if history.is_empty() {
        return Err(AppError::NotFound("No mood check-ins recorded".into()));
    }
    Ok(Json(history))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> AppResult<Json<Vec<TeamMoodReport>>> {
    let reports = state.checkins.team_report(actor_id).await?;
    Ok(Json(reports))
}
