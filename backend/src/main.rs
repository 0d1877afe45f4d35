//! Calculator service entry point.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use calculator::inbound::http::health::HealthState;
use calculator::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use calculator::settings::ServerSettings;

use server::{ServerConfig, create_server};

async fn connect(settings: &ServerSettings, database_url: &str) -> Result<DbPool> {
    if settings.run_migrations() {
        run_pending_migrations(database_url.to_owned())
            .await
            .wrap_err("apply database migrations")?;
    }
    let config = PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    DbPool::new(config).await.wrap_err("build database pool")
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("load server settings")?;
    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect(&settings, database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %settings.bind_addr(), "starting calculator server");
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    server.await.wrap_err("run HTTP server")
}
