use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::resource::{NewResource, Resource};
use crate::AppState;

pub async fn create_resource(
    State(state): State<AppState>,
    Json(body): Json<NewResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    body.validate()?;

    let resource = state.resources.create(body).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

pub async fn list_resources(State(state): State<AppState>) -> AppResult<Json<Vec<Resource>>> {
    let resources = state.resources.list().await?;
    if resources.is_empty() {
        return Err(AppError::NotFound("No well-being resources found".into()));
    }
    Ok(Json(resources))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Resource>> {
    let resource = state.resources.get(id).await?;
    Ok(Json(resource))
}

pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewResource>,
) -> AppResult<Json<Resource>> {
    body.validate()?;

    let resource = state
        .resources
        .update(Resource {
            id,
            name: body.name,
            kind: body.kind,
            url: body.url,
        })
        .await?;
    Ok(Json(resource))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.resources.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Resource {id} not found for deletion"
        )))
    }
}
