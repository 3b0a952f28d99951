use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::resource::{NewResource, Resource};

use super::{RepoError, ResourceRepository};

pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn insert(&self, new: &NewResource) -> Result<Resource, RepoError> {
        let resource = sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (name, kind, url) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.kind)
        .bind(&new.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(resource)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError> {
        let resource = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(resource)
    }

    async fn find_all(&self) -> Result<Vec<Resource>, RepoError> {
        let resources = sqlx::query_as::<_, Resource>("SELECT * FROM resources ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(resources)
    }

    async fn update(&self, resource: &Resource) -> Result<Option<Resource>, RepoError> {
        let updated = sqlx::query_as::<_, Resource>(
            "UPDATE resources SET name = $2, kind = $3, url = $4 WHERE id = $1 RETURNING *",
        )
        .bind(resource.id)
        .bind(&resource.name)
        .bind(&resource.kind)
        .bind(&resource.url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
