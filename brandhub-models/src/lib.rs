pub mod cache;
pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;

use crate::{cache::BHBaseCache, domain::prelude::Session};
use async_trait::async_trait;
use brandhub_error::{
    init::InitContextError,
    storage::CacheError,
    BHResult, MediaResult, StorageResult,
};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;
use uuid::Uuid;

/// Database management interface.
///
/// Owns the connection pool and hands out connections to the services.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Connects to the configured backend and applies the schema.
    async fn init(settings: &Settings) -> BHResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the connection pool.
    fn get_connection(&self) -> StorageResult<DatabaseConnection>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> BHResult<()>;
}

/// Cache provider interface.
///
/// Holds named caches of different value types behind one handle.
#[async_trait]
pub trait CacheProvider: Send + Sync + 'static {
    async fn init(settings: &Settings) -> BHResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Create a cache instance for a specific value type.
    ///
    /// # Arguments
    /// * `cache_name` - The name of the cache
    /// * `max_capacity` - The maximum capacity of the cache
    fn create_cache<V>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
    ) -> StorageResult<(), CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;

    /// Retrieves a cache instance for a specific value type.
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> StorageResult<Arc<dyn BHBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;
}

/// Blob storage for product images.
///
/// References returned by `save` are opaque and only meaningful to the same store.
#[async_trait]
pub trait MediaStore: Send + Sync + 'static {
    async fn save(&self, bytes: Vec<u8>) -> MediaResult<String>;

    async fn load(&self, reference: &str) -> MediaResult<Vec<u8>>;
}

/// Keeps login sessions by token.
///
/// `find` returns expired records as-is; evicting them is the caller's job.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn store(&self, session: &Session) -> StorageResult<()>;

    async fn find(&self, token: &Uuid) -> StorageResult<Option<Session>>;

    /// Returns whether a record was removed.
    async fn delete(&self, token: &Uuid) -> StorageResult<bool>;
}

/// Checks user credentials and maps emails to user ids.
#[async_trait]
pub trait CredentialVerifier: Send + Sync + 'static {
    async fn verify(&self, email: &str, password: &str) -> StorageResult<bool>;

    async fn resolve_user_id(&self, email: &str) -> StorageResult<Option<i32>>;
}
