//! FinApp entry-point: loads settings, prepares storage and serves the API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use finapp::inbound::http::health::HealthState;
use finapp::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use finapp::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Apply pending migrations on a blocking thread.
async fn migrate(database_url: &str) -> io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| io::Error::other(format!("migration task failed: {err}")))?
        .map_err(io::Error::other)?;
    info!(applied, "database schema is up to date");
    Ok(())
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

    let settings = AppSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(database_url) = settings.database_url() {
        if settings.skip_migrations {
            info!("skipping database migrations");
        } else {
            migrate(database_url).await?;
        }
        let pool_config = PoolConfig::new(
            database_url,
            settings.pool_max_size(),
            settings.pool_timeout(),
        );
        let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr, "starting HTTP server");
    create_server(health_state, &config)?.await
}
