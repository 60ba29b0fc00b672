use thiserror::Error;

/// Error type for application context initialisation
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a required component was not initialised
    #[error("component not initialized: {0}")]
    Missing(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
