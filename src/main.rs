mod config;
mod db;
mod http;
mod models;
mod service;

use config::AppConfig;
use db::PgPositionStore;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting teslamap...");

    // Init DB
    let pool = db::init_pool(&config).await?;
    info!(
        "Connected to database {} at {}:{}",
        config.database_name, config.database_host, config.database_port
    );

    let store = PgPositionStore::new(pool, config.query_timeout());
    http::serve(&config, store).await?;

    Ok(())
}
