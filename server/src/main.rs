//! posts-server: loads config from the environment, prepares the store and serves the API.
//!
//! Run from repo root: `cargo run -p posts-server`

use posts_api::{apply_migrations, app, connect, ensure_database_exists, run_seeds, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("posts_api=info,posts_server=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(environment = ?config.environment, database = %config.database.url, "starting");

    ensure_database_exists(&config.database.url).await?;
    let pool = connect(&config.database).await?;
    if config.run_migrations {
        apply_migrations(&pool).await?;
    }
    if config.run_seeds {
        run_seeds(&pool).await?;
    }

    let router = app(AppState::new(pool), config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
