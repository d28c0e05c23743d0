use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::database::seed::seeded_directory;
use activity_signup::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let directory = seeded_directory();
    info!(
        activities = directory.len(),
        build = activity_signup::BUILD_ID,
        "activity directory seeded"
    );

    let app = build_router(AppState::new(directory), &config.static_dir);

    // Bind, with one retry on the next port
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        static_dir = %config.static_dir.display(),
        "server listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
