use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference data. Which role ids carry HR or manager privileges is
/// decided by configuration, not by anything stored on this row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
