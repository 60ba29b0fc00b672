use crate::{media::MediaError, storage::StorageError};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures surfaced by the brand aggregate services.
///
/// Callers map the variants onto responses: `NotFound` to a missing resource,
/// `PermissionDenied` to an authorization failure, `MalformedInput` to a bad request,
/// everything else to a server fault.
#[derive(Error, Debug)]
pub enum BrandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("user {requester} is not allowed to modify brand {brand_id}")]
    PermissionDenied { brand_id: i32, requester: i32 },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{0}")]
    Storage(StorageError),

    #[error("{0}")]
    Media(#[from] MediaError),
}

impl From<StorageError> for BrandError {
    #[inline]
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::EntityNotFound(what) => BrandError::NotFound(what),
            e if e.is_malformed_input() => BrandError::MalformedInput(e.to_string()),
            e => BrandError::Storage(e),
        }
    }
}

impl From<DbErr> for BrandError {
    #[inline]
    fn from(e: DbErr) -> Self {
        BrandError::Storage(StorageError::DBError(e))
    }
}

impl From<ValidationErrors> for BrandError {
    #[inline]
    fn from(e: ValidationErrors) -> Self {
        BrandError::MalformedInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_classification() {
        let e: BrandError = StorageError::EntityNotFound("brand 7".into()).into();
        assert!(matches!(e, BrandError::NotFound(ref s) if s == "brand 7"));

        let e: BrandError = StorageError::IdCountMismatch {
            entity: "contacts".into(),
            rows: 2,
            ids: 1,
        }
        .into();
        assert!(matches!(e, BrandError::MalformedInput(_)));
        assert!(e.to_string().contains("insufficient contacts data"));

        let e: BrandError = StorageError::StorageUnavailable.into();
        assert!(matches!(e, BrandError::Storage(_)));
    }
}
