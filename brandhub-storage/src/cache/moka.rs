use async_trait::async_trait;
use brandhub_error::{storage::CacheError, StorageResult};
use brandhub_models::cache::BHBaseCache;
use moka::{
    future::{Cache as MokaInner, CacheBuilder},
    Expiry,
};
use std::time::{Duration, Instant};

#[derive(Clone)]
struct CacheItem<V> {
    value: V,
    ttl: Duration,
}

/// Moka-backed cache where every entry carries its own time to live.
pub struct MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    name: String,
    /// Namespace prepended to every key
    prefix: String,
    inner: MokaInner<String, CacheItem<V>>,
}

struct EntryTtl;

impl<K, V> Expiry<K, CacheItem<V>> for EntryTtl {
    fn expire_after_create(&self, _key: &K, item: &CacheItem<V>, _: Instant) -> Option<Duration> {
        Some(item.ttl)
    }
}

impl<V> MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: String, prefix: String, max_capacity: Option<u64>) -> Self {
        let mut builder = CacheBuilder::default().expire_after(EntryTtl);
        if let Some(max_capacity) = max_capacity {
            builder = builder.max_capacity(max_capacity);
        }

        Self {
            name,
            prefix,
            inner: builder.build(),
        }
    }

    #[inline]
    fn full_key(&self, key: String) -> String {
        if self.prefix.is_empty() {
            key
        } else {
            format!("{}:{key}", self.prefix)
        }
    }
}

#[async_trait]
impl<V> BHBaseCache for MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: String) -> StorageResult<Option<V>> {
        let item = self.inner.get(&self.full_key(key)).await;
        Ok(item.map(|item| item.value))
    }

    async fn set_nx_with_ttl(&self, key: String, value: V, ttl: Duration) -> StorageResult<bool> {
        if ttl.is_zero() {
            return Err(CacheError::TTLExpired("ttl must be > 0".into()).into());
        }
        let entry = self
            .inner
            .entry(self.full_key(key))
            .or_insert_with(async { CacheItem { value, ttl } })
            .await;
        Ok(entry.is_fresh())
    }

    async fn delete(&self, key: String) -> StorageResult<bool> {
        Ok(self.inner.remove(&self.full_key(key)).await.is_some())
    }
}
