use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeUpdate, LoginRequest, NewEmployee};
use crate::models::resource::Resource;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<Employee>> {
    body.validate()?;

    let employee = state
        .employees
        .login(&body.email, &body.password)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(employee))
}

/// Registration is performed *by* an HR actor; the service decides.
pub async fn register(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
    Json(body): Json<NewEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    body.validate()?;
    body.validate_hire_date(Utc::now().date_naive())
        .map_err(AppError::Validation)?;

    let employee = state.employees.register(body, actor_id).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.find_all().await?;
    if employees.is_empty() {
        return Err(AppError::NotFound("No employees registered".into()));
    }
    Ok(Json(employees))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;

    Ok(Json(employee))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut body): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    body.validate()?;
    body.id = id;

    let employee = state.employees.update(body).await?;
    Ok(Json(employee))
}

/// Removes the employee together with their mood entries and favorites.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.employees.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Employee {id} not found for deletion"
        )))
    }
}

pub async fn list_favorites(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Resource>>> {
    let resources = state.favorites.list_favorites(id).await?;
    if resources.is_empty() {
        return Err(AppError::NotFound(format!(
            "No favorite resources found for employee {id}"
        )));
    }
    Ok(Json(resources))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path((id, resource_id)): Path<(i64, i64)>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if state.favorites.add_favorite(id, resource_id).await? {
        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "linked": true })),
        ))
    } else {
        Err(AppError::Conflict(
            "Resource is already in the favorites list".into(),
        ))
    }
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((id, resource_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    if state.favorites.remove_favorite(id, resource_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Favorite link not found for this employee and resource".into(),
        ))
    }
}
