use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference data: teams are managed outside this API and only read here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub sector: String,
}
