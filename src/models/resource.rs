use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A well-being library item (article, video, meditation, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewResource {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Resource kind is required"))]
    pub kind: String,

    #[validate(url(message = "Link must be a valid URL"))]
    pub url: String,
}
