//! Service entry-point: wires the score and search history endpoints.

use std::env;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use flightscore::inbound::http::health::HealthState;
use flightscore::server::{AppSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(env::args_os())
        .map_err(|err| std::io::Error::other(format!("configuration failed: {err}")))?;

    let health = web::Data::new(HealthState::new());
    let server = create_server(health, &settings)?;
    info!(
        addr = settings.bind_addr(),
        port = settings.bind_port(),
        "listening"
    );
    server.await
}
