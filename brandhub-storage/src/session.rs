use async_trait::async_trait;
use brandhub_error::{
    storage::{CacheError, StorageError},
    StorageResult,
};
use brandhub_models::{
    cache::BHBaseCache, constants::SESSION_CACHE_NAME, domain::prelude::Session, CacheProvider,
    SessionStore,
};
use chrono::Utc;
use std::{sync::Arc, time::Duration};
use tracing::{debug, instrument};
use uuid::Uuid;

const MIN_TTL: Duration = Duration::from_secs(1);

/// Session store backed by a named cache.
///
/// Each record is kept for its remaining lifetime plus `retention`, so a lookup shortly
/// after expiry still finds it and can tell "expired" apart from "never existed".
pub struct CacheSessionStore {
    cache: Arc<dyn BHBaseCache<Value = Session> + Send + Sync>,
    retention: Duration,
}

impl CacheSessionStore {
    pub fn new(cache: Arc<dyn BHBaseCache<Value = Session> + Send + Sync>, retention: Duration) -> Self {
        Self { cache, retention }
    }

    /// Use the provider's session cache.
    pub fn from_provider<P>(provider: &P, retention: Duration) -> StorageResult<Self>
    where
        P: CacheProvider,
    {
        let cache = provider.get_cache::<Session>(SESSION_CACHE_NAME)?;
        Ok(Self::new(cache, retention))
    }

    /// Never zero, so an already expired session with no retention is still stored briefly.
    fn ttl_for(&self, session: &Session) -> Duration {
        let remaining = (session.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        (remaining + self.retention).max(MIN_TTL)
    }
}

#[async_trait]
impl SessionStore for CacheSessionStore {
    #[instrument(name = "session-store", skip_all, fields(email = %session.email))]
    async fn store(&self, session: &Session) -> StorageResult<()> {
        let ttl = self.ttl_for(session);
        let inserted = self
            .cache
            .set_nx_with_ttl(session.token.to_string(), session.clone(), ttl)
            .await?;
        if !inserted {
            return Err(StorageError::CacheKind(CacheError::AlreadyExists(
                session.token.to_string(),
            )));
        }
        debug!(expires_at = %session.expires_at, "Session stored");
        Ok(())
    }

    async fn find(&self, token: &Uuid) -> StorageResult<Option<Session>> {
        self.cache.get(token.to_string()).await
    }

    async fn delete(&self, token: &Uuid) -> StorageResult<bool> {
        self.cache.delete(token.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::moka::MokaCache;
    use chrono::Duration as ChronoDuration;

    fn store() -> CacheSessionStore {
        store_with_retention(Duration::from_secs(60))
    }

    fn store_with_retention(retention: Duration) -> CacheSessionStore {
        let cache = MokaCache::<Session>::new(SESSION_CACHE_NAME.into(), "bh:Session".into(), Some(100));
        CacheSessionStore::new(Arc::new(cache), retention)
    }

    #[tokio::test]
    async fn test_store_find_delete() {
        let store = store();
        let session = Session::new("a@x.com", ChronoDuration::seconds(30));
        store.store(&session).await.unwrap();

        assert_eq!(store.find(&session.token).await.unwrap(), Some(session.clone()));
        assert!(store.delete(&session.token).await.unwrap());
        assert_eq!(store.find(&session.token).await.unwrap(), None);
        assert!(!store.delete(&session.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_sessions_stay_visible() {
        let store = store();
        let session = Session::new("a@x.com", ChronoDuration::seconds(-5));
        store.store(&session).await.unwrap();

        let found = store.find(&session.token).await.unwrap().unwrap();
        assert!(found.is_expired());
    }

    #[tokio::test]
    async fn test_duplicate_token_rejected() {
        let store = store();
        let session = Session::new("a@x.com", ChronoDuration::seconds(30));
        store.store(&session).await.unwrap();
        assert!(matches!(
            store.store(&session).await,
            Err(StorageError::CacheKind(CacheError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn test_expired_session_without_retention_is_stored() {
        let store = store_with_retention(Duration::ZERO);
        let session = Session::new("a@x.com", ChronoDuration::seconds(-5));
        store.store(&session).await.unwrap();
        assert!(store.find(&session.token).await.unwrap().is_some());
    }
}
