use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::resource::Resource;

use super::{FavoriteRepository, RepoError};

pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn link(&self, employee_id: i64, resource_id: i64) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO favorite_resources (employee_id, resource_id) VALUES ($1, $2)")
            .bind(employee_id)
            .bind(resource_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn unlink(&self, employee_id: i64, resource_id: i64) -> Result<bool, RepoError> {
        let result = sqlx::query(
            "DELETE FROM favorite_resources WHERE employee_id = $1 AND resource_id = $2",
        )
        .bind(employee_id)
        .bind(resource_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_employee(&self, employee_id: i64) -> Result<Vec<Resource>, RepoError> {
        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT r.id, r.name, r.kind, r.url
            FROM resources r
            JOIN favorite_resources f ON r.id = f.resource_id
            WHERE f.employee_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }

    async fn delete_by_employee(&self, employee_id: i64) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM favorite_resources WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
