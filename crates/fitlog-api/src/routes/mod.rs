use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState, public_dir: &str) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // User endpoints
        .route("/api/users", post(handlers::user::create_user))
        .route("/api/users", get(handlers::user::list_users))

        // Exercise endpoints
        .route("/api/users/:user_id/exercises", post(handlers::exercise::log_exercise))
        .route("/api/users/:user_id/logs", get(handlers::log::fetch_log))

        // Landing page and static assets
        .route_service("/", ServeFile::new(format!("{}/index.html", public_dir)))
        .nest_service("/public", ServeDir::new(public_dir))

        // Add state
        .with_state(state)

        // Add CORS and request tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
