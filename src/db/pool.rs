use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pooled, per-operation-acquired connections; nothing in the service layer
/// holds a connection across requests.
pub async fn create_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
        .expect("Failed to create database pool")
}
