pub mod postgres;
pub mod sqlite;

use brandhub_error::BHResult;
use brandhub_models::settings::{Db, SqlType};
use sea_orm::DatabaseConnection;

/// Connect to whichever backend `db.kind` selects.
pub async fn init_db(config: &Db) -> BHResult<DatabaseConnection> {
    match config.kind {
        SqlType::Sqlite => sqlite::init_db(&config.sqlite).await,
        SqlType::Postgres => postgres::init_db(&config.postgres).await,
    }
}
