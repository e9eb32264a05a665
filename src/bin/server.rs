//! Store hours HTTP server binary.
//!
//! Loads the store configuration, seeds an in-memory schedule repository
//! from it, and serves the opening-hours API.
//!
//! # Usage
//!
//! ```bash
//! STORE_CONFIG_DIR=./config/store PORT=8080 cargo run --bin store-hours-server
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_CONFIG_DIR`: configuration directory (default: ./config/store)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: store_hours=info,store_hours_server=info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use store_hours::api::{AppState, create_router};
use store_hours::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/store";
const DEFAULT_LOG_FILTER: &str = "store_hours=info,store_hours_server=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    let config_dir =
        env::var("STORE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        store = %loader.store().name,
        utc_offset = %loader.config().offset(),
        configured_days = loader.week().len(),
        config_dir = %config_dir,
        "Store configuration loaded"
    );

    let state = AppState::from_config(loader.into_config());
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
