//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level failures are
//! handled inside the `auth` and `posts` crates.

use api::app;
use auth::{AuthConfig, PgUserRepository};
use posts::PgPostRepository;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,posts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Session configuration
    let config = if cfg!(debug_assertions) {
        match env::var("SESSION_SECRET") {
            Ok(secret) => Arc::new(AuthConfig::new(secret.into_bytes())),
            Err(_) => {
                tracing::warn!("SESSION_SECRET not set, using a random development secret");
                Arc::new(AuthConfig::development())
            }
        }
    } else {
        // In production, the secret must come from the environment so
        // tokens survive restarts
        let secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set in production"))?;
        Arc::new(AuthConfig::new(secret.into_bytes()))
    };

    // Build router
    let app = app(
        PgUserRepository::new(pool.clone()),
        PgPostRepository::new(pool),
        config,
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
