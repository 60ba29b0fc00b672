use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("media io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("media payload is not valid base64: {0}")]
    Decode(String),

    #[error("media payload is empty")]
    EmptyPayload,

    #[error("media reference not found: {0}")]
    NotFound(String),

    #[error("invalid media reference: {0}")]
    InvalidReference(String),
}
