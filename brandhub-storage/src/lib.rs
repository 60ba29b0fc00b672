mod cache;
mod media;
pub mod migration;
mod session;
mod sql;

pub use crate::{
    cache::moka::MokaCache, media::FsMediaStore, session::CacheSessionStore,
    sql::sqlite::init_memory_db,
};

use async_trait::async_trait;
use brandhub_error::{
    init::InitContextError,
    storage::{CacheError, StorageError},
    BHResult, StorageResult,
};
use brandhub_models::{
    cache::BHBaseCache,
    constants::SESSION_CACHE_NAME,
    domain::prelude::Session,
    settings::{CacheType, Settings},
    CacheProvider, DbManager,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::{any::Any, collections::HashMap, sync::Arc};
use tracing::{info, instrument};

pub struct BHDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl BHDbManager {
    /// Wrap an already open connection, applying the schema first.
    pub async fn from_connection(db: DatabaseConnection) -> BHResult<Arc<Self>, InitContextError> {
        Migrator::up(&db, None).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to migrate database: {e}"))
        })?;
        Ok(Arc::new(BHDbManager { db_conn: Some(db) }))
    }
}

#[async_trait]
impl DbManager for BHDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> BHResult<Arc<Self>, InitContextError> {
        let db = sql::init_db(&settings.db).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init {:?} database: {e}", settings.db.kind))
        })?;

        let db_manager = Self::from_connection(db).await?;
        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    fn get_connection(&self) -> StorageResult<DatabaseConnection> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> BHResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed");
        Ok(())
    }
}

#[derive(Debug)]
pub struct BHCacheProvider {
    prefix: String,
    delimiter: String,
    cache_type: CacheType,
    caches: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl BHCacheProvider {
    pub fn new(prefix: &str, delimiter: &str, cache_type: CacheType) -> Self {
        Self {
            prefix: prefix.into(),
            delimiter: delimiter.into(),
            cache_type,
            caches: HashMap::new(),
        }
    }

    #[inline]
    #[instrument(name = "init-caches", skip_all)]
    fn init_caches(&mut self, settings: &Settings) -> StorageResult<(), CacheError> {
        self.create_cache::<Session>(SESSION_CACHE_NAME, Some(settings.session.max_capacity))
    }
}

#[async_trait]
impl CacheProvider for BHCacheProvider {
    #[inline]
    #[instrument(name = "init-cache-provider", skip(settings))]
    async fn init(settings: &Settings) -> BHResult<Arc<Self>, InitContextError> {
        let mut provider = Self::new(
            &settings.cache.prefix,
            &settings.cache.delimiter,
            settings.cache.r#type,
        );
        provider
            .init_caches(settings)
            .map_err(|e| InitContextError::Primitive(format!("Failed to init caches: {e}")))?;
        Ok(Arc::new(provider))
    }

    #[inline]
    #[instrument(name = "create-cache", skip(self))]
    fn create_cache<V: Clone + Send + Sync + 'static>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
    ) -> StorageResult<(), CacheError> {
        if self.caches.contains_key(cache_name) {
            return Err(CacheError::AlreadyExists(cache_name.to_string()));
        }

        let full_prefix = format!("{}{}{}", self.prefix, self.delimiter, cache_name);
        let cache = match self.cache_type {
            CacheType::Moka => {
                MokaCache::<V>::new(cache_name.to_string(), full_prefix, max_capacity)
            }
        };
        let cache: Arc<dyn BHBaseCache<Value = V> + Send + Sync> = Arc::new(cache);
        self.caches.insert(cache_name.to_string(), Arc::new(cache));
        info!("Cache created successfully: {}", cache_name);
        Ok(())
    }

    #[inline]
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> StorageResult<Arc<dyn BHBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        V: Clone + Send + Sync + 'static,
    {
        self.caches
            .get(cache_name)
            .and_then(|cache| {
                cache
                    .downcast_ref::<Arc<dyn BHBaseCache<Value = V> + Send + Sync>>()
                    .map(Arc::clone)
            })
            .ok_or(CacheError::NotFound(cache_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_creates_session_cache() {
        let provider = BHCacheProvider::init(&Settings::default()).await.unwrap();
        let cache = provider.get_cache::<Session>(SESSION_CACHE_NAME).unwrap();
        assert_eq!(cache.name(), SESSION_CACHE_NAME);

        // Wrong value type is reported as missing
        assert!(matches!(
            provider.get_cache::<String>(SESSION_CACHE_NAME),
            Err(CacheError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_cache_rejected() {
        let mut provider = BHCacheProvider::new("bh", ":", CacheType::Moka);
        provider.create_cache::<u32>("a", None).unwrap();
        assert!(matches!(
            provider.create_cache::<u32>("a", None),
            Err(CacheError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_db_migrates() {
        let db = init_memory_db().await.unwrap();
        let manager = BHDbManager::from_connection(db).await.unwrap();
        assert!(manager.get_connection().is_ok());
        manager.close().await.unwrap();
    }
}
