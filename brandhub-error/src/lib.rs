pub mod auth;
pub mod brand;
pub mod init;
pub mod media;
pub mod storage;

use anyhow::Error as AnyhowError;
use auth::AuthError;
use brand::BrandError;
use config::ConfigError;
use init::InitContextError;
use media::MediaError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;

pub type BHResult<T, E = BHError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type BrandResult<T, E = BrandError> = Result<T, E>;
pub type AuthResult<T, E = AuthError> = Result<T, E>;
pub type MediaResult<T, E = MediaError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum BHError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    BrandError(#[from] BrandError),
    #[error("{0}")]
    AuthError(#[from] AuthError),
    #[error("{0}")]
    MediaError(#[from] MediaError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<String> for BHError {
    #[inline]
    fn from(e: String) -> Self {
        BHError::Msg(e)
    }
}

impl From<&str> for BHError {
    #[inline]
    fn from(e: &str) -> Self {
        BHError::Msg(e.to_string())
    }
}

impl From<DbErr> for BHError {
    #[inline]
    fn from(e: DbErr) -> Self {
        BHError::StorageError(StorageError::DBError(e))
    }
}
