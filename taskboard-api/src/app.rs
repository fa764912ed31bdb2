/// Application state and router builder
///
/// This module defines the shared application state and provides a
/// function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::routes;
use crate::services::{TaskService, UserService};
use axum::{
    http::{header, Method},
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskboard_shared::repo::task::TaskRepo;
use taskboard_shared::repo::user::UserRepo;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The services receive their collaborators (pool, repositories) at
/// construction; there is no ambient registry.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Task service
    pub tasks: TaskService,

    /// User service
    pub users: UserService,
}

impl AppState {
    /// Creates new application state and wires the services
    pub fn new(db: PgPool, config: Config) -> Self {
        let task_repo = TaskRepo::new();
        let user_repo = UserRepo::new();

        let tasks = TaskService::new(db.clone(), task_repo, user_repo.clone());
        let users = UserService::new(db.clone(), user_repo);

        Self {
            db,
            config: Arc::new(config),
            tasks,
            users,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                   # Health check
/// ├── /task/                    # Task resource
/// │   ├── GET    /              # List tasks
/// │   ├── POST   /              # Create task
/// │   ├── PATCH  /:id           # Partial update
/// │   ├── DELETE /:id           # Delete task
/// │   └── PATCH  /:id/assign    # Assign user
/// └── /user/                    # User resource
///     └── POST   /              # Create user
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Request logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer): all origins, GET/POST/PATCH/DELETE,
///    Content-Type/Accept/Origin headers, credentials disabled
pub fn build_router(state: AppState) -> Router {
    let task_routes = Router::new()
        .route("/", get(routes::task::list_tasks).post(routes::task::create_task))
        .route(
            "/:id",
            patch(routes::task::update_task).delete(routes::task::delete_task),
        )
        .route("/:id/assign", patch(routes::task::assign_user));

    let user_routes = Router::new().route("/", post(routes::user::create_user));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/task", task_routes)
        .nest("/user", user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, DatabaseConfig};

    #[tokio::test]
    async fn test_app_state_wires_services() {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/test".to_string(),
                max_connections: 10,
            },
        };

        // connect_lazy never touches the network
        let pool = PgPool::connect_lazy(&config.database.url).unwrap();
        let state = AppState::new(pool, config);
        let _router = build_router(state);
    }
}
