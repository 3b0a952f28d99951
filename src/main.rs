use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repositories;
mod services;
#[cfg(test)]
mod testing;

use config::Config;
use repositories::{
    EmployeeRepository, FavoriteRepository, MoodEntryRepository, PgEmployeeRepository,
    PgFavoriteRepository, PgMoodEntryRepository, PgResourceRepository, PgRoleRepository,
    PgTeamRepository, ResourceRepository, RoleRepository, TeamRepository,
};
use services::{EmployeeService, FavoritesService, MoodCheckinService, ResourceService};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub checkins: Arc<MoodCheckinService>,
    pub employees: Arc<EmployeeService>,
    pub favorites: Arc<FavoritesService>,
    pub resources: Arc<ResourceService>,
    pub teams: Arc<dyn TeamRepository>,
    pub roles: Arc<dyn RoleRepository>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "humanize_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    // Database
    let db = db::create_pool(&config.database_url).await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let policy = config.access_policy();

    let employee_repo: Arc<dyn EmployeeRepository> =
        Arc::new(PgEmployeeRepository::new(db.clone()));
    let entry_repo: Arc<dyn MoodEntryRepository> =
        Arc::new(PgMoodEntryRepository::new(db.clone()));
    let favorite_repo: Arc<dyn FavoriteRepository> =
        Arc::new(PgFavoriteRepository::new(db.clone()));
    let resource_repo: Arc<dyn ResourceRepository> =
        Arc::new(PgResourceRepository::new(db.clone()));

    let state = AppState {
        db: db.clone(),
        checkins: Arc::new(MoodCheckinService::new(
            entry_repo.clone(),
            employee_repo.clone(),
            policy,
        )),
        employees: Arc::new(EmployeeService::new(
            employee_repo,
            entry_repo,
            favorite_repo.clone(),
            policy,
        )),
        favorites: Arc::new(FavoritesService::new(favorite_repo)),
        resources: Arc::new(ResourceService::new(resource_repo)),
        teams: Arc::new(PgTeamRepository::new(db.clone())),
        roles: Arc::new(PgRoleRepository::new(db)),
    };

    // Build routes
    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Auth
        .route("/api/auth/login", post(handlers::employees::login))
        // Mood check-ins
        .route("/api/checkins", post(handlers::checkins::submit))
        .route(
            "/api/checkins/history/:actor_id",
            get(handlers::checkins::raw_history),
        )
        .route(
            "/api/checkins/anonymized/:actor_id",
            get(handlers::checkins::anonymized_history),
        )
        .route(
            "/api/checkins/dashboard/:actor_id",
            get(handlers::checkins::dashboard),
        )
        // Employees
        .route("/api/employees", get(handlers::employees::list_employees))
        .route(
            "/api/employees/register/:actor_id",
            post(handlers::employees::register),
        )
        .route("/api/employees/:id", get(handlers::employees::get_employee))
        .route("/api/employees/:id", put(handlers::employees::update_employee))
        .route(
            "/api/employees/:id",
            delete(handlers::employees::delete_employee),
        )
        // Favorites
        .route(
            "/api/employees/:id/favorites",
            get(handlers::employees::list_favorites),
        )
        .route(
            "/api/employees/:id/favorites/:resource_id",
            post(handlers::employees::add_favorite),
        )
        .route(
            "/api/employees/:id/favorites/:resource_id",
            delete(handlers::employees::remove_favorite),
        )
        // Well-being resources
        .route("/api/resources", get(handlers::resources::list_resources))
        .route("/api/resources", post(handlers::resources::create_resource))
        .route("/api/resources/:id", get(handlers::resources::get_resource))
        .route("/api/resources/:id", put(handlers::resources::update_resource))
        .route(
            "/api/resources/:id",
            delete(handlers::resources::delete_resource),
        )
        // Reference data
        .route("/api/teams", get(handlers::reference::list_teams))
        .route("/api/roles", get(handlers::reference::list_roles));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<axum::http::HeaderValue>()
                .expect("FRONTEND_URL must be a valid origin"),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = app
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
