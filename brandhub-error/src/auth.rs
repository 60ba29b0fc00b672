use crate::storage::StorageError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user already exists: {0}")]
    UserExists(String),

    #[error("session not found")]
    SessionNotFound,

    #[error("session expired")]
    SessionExpired,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl From<DbErr> for AuthError {
    #[inline]
    fn from(e: DbErr) -> Self {
        AuthError::Storage(StorageError::DBError(e))
    }
}

impl From<ValidationErrors> for AuthError {
    #[inline]
    fn from(e: ValidationErrors) -> Self {
        AuthError::MalformedInput(e.to_string())
    }
}
