use axum::{extract::State, Json};

use crate::error::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::team::Team;
use crate::repositories::{RoleRepository, TeamRepository};
use crate::AppState;

pub async fn list_teams(State(state): State<AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = state.teams.find_all().await?;
    if teams.is_empty() {
        return Err(AppError::NotFound("No teams registered".into()));
    }
    Ok(Json(teams))
}

pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = state.roles.find_all().await?;
    if roles.is_empty() {
        return Err(AppError::NotFound("No roles registered".into()));
    }
    Ok(Json(roles))
}
