use async_trait::async_trait;
use brandhub_error::StorageResult;
use std::time::Duration;

/// Keyed cache with per-entry expiry.
#[async_trait]
pub trait BHBaseCache: Send + Sync + 'static {
    type Value: Clone + Send + Sync + 'static;

    fn name(&self) -> &str;

    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>>;

    /// Insert `value` for `ttl` unless `key` is already present. Returns whether it was inserted.
    async fn set_nx_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<bool>;

    /// Returns whether `key` was present.
    async fn delete(&self, key: String) -> StorageResult<bool>;
}
