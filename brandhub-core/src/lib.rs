//! Services over the brand aggregate and user sessions.
//!
//! [`BrandService`] writes and reads whole aggregates, each write inside one transaction.
//! [`AuthService`] registers users and manages their login sessions.

mod auth;
mod brand;
mod credentials;

pub use auth::AuthService;
pub use brand::BrandService;
pub use credentials::DbCredentialVerifier;
