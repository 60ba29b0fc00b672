#![allow(dead_code)]

use async_trait::async_trait;
use brandhub_core::{AuthService, BrandService, DbCredentialVerifier};
use brandhub_error::{media::MediaError, MediaResult};
use brandhub_models::{
    domain::prelude::{Brand, RegisterRequest},
    entities::prelude::{
        Brand as BrandEntity, BrandContact, BrandOwner, Contact, Media, Owner, Price, Product,
        Statistic,
    },
    settings::Settings,
    CacheProvider, MediaStore,
};
use brandhub_storage::{
    init_memory_db,
    migration::{Migrator, MigratorTrait},
    BHCacheProvider, CacheSessionStore, FsMediaStore,
};
use brandhub_utils::media::encode_data_uri;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Once,
    },
    time::Duration,
};
use tempfile::TempDir;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub const ALICE: &str = "alice@example.com";
pub const BOB: &str = "bob@example.com";
pub const PASSWORD: &str = "secret-pass";

/// A tiny PNG-looking payload.
pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 9, 8, 7];

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

pub struct Harness {
    pub db: DatabaseConnection,
    pub brands: BrandService,
    pub auth: AuthService,
    _media_dir: Option<TempDir>,
}

/// Services over a fresh in-memory database and a temporary media directory.
pub async fn harness() -> Harness {
    let dir = tempfile::tempdir().expect("media dir");
    let media = FsMediaStore::new(dir.path()).await.expect("media store");
    let mut harness = harness_with_media(Arc::new(media)).await;
    harness._media_dir = Some(dir);
    harness
}

pub async fn harness_with_media(media: Arc<dyn MediaStore>) -> Harness {
    let lifetime = chrono::Duration::seconds(Settings::default().session.lifetime);
    build(media, lifetime).await
}

/// Every session is born expired.
pub async fn harness_with_past_lifetime() -> Harness {
    build(
        Arc::new(FailingMediaStore::new(0)),
        chrono::Duration::seconds(-5),
    )
    .await
}

async fn build(media: Arc<dyn MediaStore>, lifetime: chrono::Duration) -> Harness {
    init_tracing();
    let db = init_memory_db().await.expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply schema");

    let settings = Settings::default();
    let provider = BHCacheProvider::init(&settings).await.expect("cache provider");
    let sessions = CacheSessionStore::from_provider(
        provider.as_ref(),
        Duration::from_secs(settings.session.retention),
    )
    .expect("session cache");
    let credentials = Arc::new(DbCredentialVerifier::new(db.clone()));

    Harness {
        brands: BrandService::new(db.clone(), media, credentials.clone()),
        auth: AuthService::new(db.clone(), credentials, Arc::new(sessions), lifetime),
        db,
        _media_dir: None,
    }
}

pub async fn register(auth: &AuthService, email: &str) -> i32 {
    auth.register(RegisterRequest {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        name: "Test".to_string(),
        surname: "User".to_string(),
    })
    .await
    .expect("register user")
}

/// One product, one contact, nothing else.
pub fn cafe_a() -> Brand {
    serde_json::from_value(serde_json::json!({
        "name": "Cafe A",
        "description": "Coffee on the corner",
        "location": "Moscow",
        "isOpen": true,
        "owners": [],
        "contacts": [{"typeOf": "PHONE", "link": "+1-555"}],
        "statistics": [],
        "products": [{
            "name": "Latte",
            "description": "",
            "price": {"lowEnd": 120, "highEnd": 150, "currency": "USD"},
            "images": []
        }]
    }))
    .expect("cafe fixture")
}

/// Every child collection populated, images included.
pub fn full_brand(name: &str) -> Brand {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "description": "Bakery chain",
        "location": "Kazan",
        "isOpen": false,
        "owners": [
            {"person": {"name": "Ivan", "surname": "Petrov", "fathername": "Sergeevich", "bioInfo": "founder"}, "history": []},
            {"person": {"name": "Anna", "surname": "Smirnova", "fathername": "", "bioInfo": ""}, "history": []}
        ],
        "contacts": [
            {"typeOf": "email", "link": "hello@bakery.test"},
            {"typeOf": "site", "link": "https://bakery.test"}
        ],
        "statistics": [{
            "name": "visits",
            "description": "monthly visitors",
            "startPeriod": "2024-01-01",
            "endPeriod": "2024-01-31",
            "value": 1520.5
        }],
        "products": [
            {
                "name": "Croissant",
                "description": "butter",
                "price": {"lowEnd": 80, "highEnd": 100, "currency": "RUB"},
                "images": [encode_data_uri(PNG), encode_data_uri(JPEG)]
            },
            {
                "name": "Baguette",
                "description": "",
                "price": {"lowEnd": 60, "highEnd": 60, "currency": "RUB"},
                "images": [encode_data_uri(JPEG)]
            }
        ]
    }))
    .expect("full fixture")
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub brands: u64,
    pub contacts: u64,
    pub brand_contacts: u64,
    pub owners: u64,
    pub brand_owners: u64,
    pub statistics: u64,
    pub prices: u64,
    pub products: u64,
    pub media: u64,
}

async fn count<E>(db: &DatabaseConnection) -> u64
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(db).await.expect("count rows")
}

pub async fn row_counts(db: &DatabaseConnection) -> RowCounts {
    RowCounts {
        brands: count::<BrandEntity>(db).await,
        contacts: count::<Contact>(db).await,
        brand_contacts: count::<BrandContact>(db).await,
        owners: count::<Owner>(db).await,
        brand_owners: count::<BrandOwner>(db).await,
        statistics: count::<Statistic>(db).await,
        prices: count::<Price>(db).await,
        products: count::<Product>(db).await,
        media: count::<Media>(db).await,
    }
}

/// Accepts `allowed` blobs, then fails every save.
pub struct FailingMediaStore {
    allowed: usize,
    saved: AtomicUsize,
}

impl FailingMediaStore {
    pub fn new(allowed: usize) -> Self {
        Self {
            allowed,
            saved: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MediaStore for FailingMediaStore {
    async fn save(&self, bytes: Vec<u8>) -> MediaResult<String> {
        let n = self.saved.fetch_add(1, Ordering::SeqCst);
        if n >= self.allowed {
            return Err(MediaError::Io(std::io::Error::other("disk full")));
        }
        Ok(format!("{n}-{}", bytes.len()))
    }

    async fn load(&self, reference: &str) -> MediaResult<Vec<u8>> {
        Err(MediaError::NotFound(reference.to_string()))
    }
}
