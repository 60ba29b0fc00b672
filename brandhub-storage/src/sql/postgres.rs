use brandhub_error::BHResult;
use brandhub_models::settings::{BHDbConfig, Postgres};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

#[instrument(name = "init_postgres_db", skip_all)]
pub async fn init_db(config: &Postgres) -> BHResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.to_url());
    opts.connect_timeout(Duration::from_millis(config.timeout()))
        .acquire_timeout(Duration::from_millis(config.timeout()))
        .max_connections(config.max_connections())
        .sqlx_logging(cfg!(debug_assertions))
        .sqlx_logging_level(LevelFilter::Debug);

    info!("Connecting to PostgreSQL database");
    let db = Database::connect(opts).await?;
    info!("Successfully connected to PostgreSQL database");

    Ok(db)
}
