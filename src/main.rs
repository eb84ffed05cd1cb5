//! Attendance Engine HTTP server.
//!
//! Reads its settings from the environment (a `.env` file is honoured):
//!
//! - `ATTENDANCE_CONFIG_DIR`: configuration directory, default `./config/default`
//! - `ATTENDANCE_BIND_ADDR`: listen address, default `0.0.0.0:8080`
//! - `RUST_LOG`: tracing filter, default `info`

use std::env;
use std::error::Error;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

struct ServerSettings {
    config_dir: String,
    bind_addr: String,
}

impl ServerSettings {
    fn from_env() -> Self {
        Self {
            config_dir: env::var("ATTENDANCE_CONFIG_DIR")
                .unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string()),
            bind_addr: env::var("ATTENDANCE_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let settings = ServerSettings::from_env();
    let config = ConfigLoader::load(&settings.config_dir)?;
    info!(
        config_dir = %settings.config_dir,
        organisation = %config.organisation().name,
        "Configuration ready"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!(bind_addr = %settings.bind_addr, "Attendance engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
