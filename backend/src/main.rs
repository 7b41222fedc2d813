//! Backend entry-point: loads settings, prepares the database and serves the
//! lending API.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use library_backend::inbound::http::health::HealthState;
use library_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use library_backend::settings::{LibrarySettings, ProcessEnv};
use server::{ServerConfig, create_server};

/// Load [`LibrarySettings`] from the given arguments, the environment and
/// configuration files.
fn load_settings<I>(args: I) -> io::Result<LibrarySettings>
where
    I: IntoIterator<Item = OsString>,
{
    LibrarySettings::load_from_iter(args).map_err(|e| io::Error::other(e.to_string()))
}

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

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let database_url = settings
        .database_url(&ProcessEnv)
        .map_err(io::Error::other)?;

    if !settings.skip_migrations {
        let url = database_url.clone();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .map_err(io::Error::other)?
            .map_err(io::Error::other)?;
        info!(applied, "database schema up to date");
    }

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_size()))
        .await
        .map_err(io::Error::other)?;

    let config = ServerConfig::new(bind_addr, pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::MetricsLayer::prometheus());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "library backend listening");

    let result = server.await;
    health_state.mark_draining();
    result
}
