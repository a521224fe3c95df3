//! HTTP server for the paycheck engine.
//!
//! Environment:
//! - `PAYCHECK_CONFIG_DIR`: directory holding `deductions.yaml` (default `./config`)
//! - `PAYCHECK_BIND`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::sync::Arc;

use paycheck_engine::api::{AppState, create_router};
use paycheck_engine::config::ConfigLoader;
use paycheck_engine::store::InMemoryEmployeeStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let config_dir = env::var("PAYCHECK_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = env::var("PAYCHECK_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let rules = ConfigLoader::load(&config_dir)?.into_rules();
    info!(config_dir = %config_dir, "Deduction rules loaded");

    let store = InMemoryEmployeeStore::seeded()?;
    let router = create_router(AppState::new(Arc::new(store), rules));

    let listener = TcpListener::bind(&bind).await?;
    info!(address = %listener.local_addr()?, "Paycheck engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
