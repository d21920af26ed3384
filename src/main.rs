//! BRT billing service binary
//!
//! Serves call records, subscriber balances and CDRs from an in-memory
//! store seeded at startup.

use anyhow::Context;
use brt_api::AppState;
use brt_billing::{startup, telemetry};
use brt_core::AppConfig;
use brt_store::InMemoryStore;
use std::net::TcpListener;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    telemetry::init_tracing(&config.logging)?;

    info!(
        "Starting BRT billing service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = InMemoryStore::seeded(&config.seed)
        .await
        .context("Failed to seed store")?;

    let bind_addr = config.server_addr();
    let listener =
        TcpListener::bind(&bind_addr).with_context(|| format!("Failed to bind {}", bind_addr))?;

    startup::run(listener, AppState::from_store(&store), &config)?.await?;

    info!("Server stopped");
    Ok(())
}
