use thiserror::Error;

/// Classifies cache-related errors to avoid ad-hoc strings.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// TTL or expire_at was already expired or invalid
    #[error("cache ttl expired or invalid: {0}")]
    TTLExpired(String),
    /// Cache already exists
    #[error("cache already exists: {0}")]
    AlreadyExists(String),
    /// Cache not found, or registered with another value type
    #[error("cache not found: {0}")]
    NotFound(String),
    /// Generic cache error message
    #[error("cache error: {0}")]
    Msg(String),
}

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] sea_orm::DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Structured cache error kind for better classification
    #[error("{0}")]
    CacheKind(#[from] CacheError),

    /// A batch came back with a different number of generated ids than rows submitted,
    /// or a caller supplied a mismatching id list for a batched update/link.
    #[error("insufficient {entity} data: {rows} rows but {ids} ids")]
    IdCountMismatch {
        entity: String,
        rows: usize,
        ids: usize,
    },

    /// The store handed back the same generated id twice for one batch.
    #[error("duplicate generated id {id} in {entity} batch")]
    DuplicateId { entity: String, id: i32 },

    /// A batched update found a column set on some rows but not on others.
    #[error("column `{column}` is not set on every {entity} row")]
    PartialColumn {
        entity: String,
        column: String,
    },
}

impl StorageError {
    /// Whether the error is a caller contract violation rather than a store fault.
    #[inline]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            StorageError::IdCountMismatch { .. } | StorageError::PartialColumn { .. }
        )
    }
}
