//! User service entry-point: loads settings, selects storage, and serves the
//! REST API with OpenAPI docs.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_storage, create_server, drain_on, shutdown_signal};
use user_service::inbound::http::health::HealthState;
use user_service::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid bind host {:?}: {err}", settings.bind_host()),
        )
    })?;

    let storage = build_storage(&settings).await?;
    let logger = tracing::dispatcher::get_default(|dispatch| dispatch.clone());
    let config = ServerConfig::new(bind_addr, storage, logger);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::prometheus());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    info!(%bind_addr, "user service listening");
    let (served, ()) = tokio::join!(server, drain_on(shutdown_signal(), health_state, handle));
    served
}
