use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitlog_api::{routes, state::ApiState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitlog_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let port = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

    // Initialize database
    let database = fitlog_db::Database::new(&database_url).await?;
    database.init_schema().await?;

    // Create app state
    let state = ApiState {
        db: Arc::new(database),
    };

    // Build router
    let app = routes::create_router(state, &public_dir);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Fitlog API running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
