#![allow(dead_code)]

use brandhub_models::{
    domain::prelude::NewUser,
    entities::prelude::{BrandActiveModel, PriceActiveModel},
};
use brandhub_repository::{BrandRepository, UserRepository};
use brandhub_storage::{
    init_memory_db,
    migration::{Migrator, MigratorTrait},
};
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    init_tracing();
    let db = init_memory_db().await.expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply schema");
    db
}

pub async fn seed_user(db: &DatabaseConnection, email: &str) -> i32 {
    UserRepository::create(
        NewUser {
            email: email.to_string(),
            password: "hash".to_string(),
            name: "Test".to_string(),
            surname: "User".to_string(),
        },
        db,
    )
    .await
    .expect("seed user")
}

pub async fn seed_brand(db: &DatabaseConnection, name: &str, added_by: i32) -> i32 {
    BrandRepository::create(
        BrandActiveModel {
            name: Set(name.to_string()),
            description: Set(String::new()),
            location: Set("Moscow".to_string()),
            is_open: Set(true),
            added_by: Set(Some(added_by)),
            created_at: Set(Some(Utc::now())),
            updated_at: Set(Some(Utc::now())),
            ..Default::default()
        },
        db,
    )
    .await
    .expect("seed brand")
}

pub fn price(brand_id: i32, low: i32, high: i32) -> PriceActiveModel {
    PriceActiveModel {
        brand_id: Set(brand_id),
        low_end: Set(low),
        high_end: Set(high),
        currency: Set("USD".to_string()),
        ..Default::default()
    }
}
