use bcrypt::{hash, verify, BcryptError};
use sha2::{Digest, Sha256};

/// Work factor used for stored password hashes.
pub const BCRYPT_COST: u32 = 8;

/// Hash a password using bcrypt
///
/// # Example
/// ```
/// use brandhub_utils::hash::{bcrypt_check, bcrypt_hash};
///
/// let hashed = bcrypt_hash("my_password").unwrap();
/// assert!(bcrypt_check("my_password", &hashed));
/// ```
#[inline]
pub fn bcrypt_hash(password: &str) -> Result<String, BcryptError> {
    hash(password.as_bytes(), BCRYPT_COST)
}

/// Compare a plaintext password against a bcrypt hash.
///
/// A malformed hash never matches.
#[inline]
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

/// Calculate SHA-256 hash of input bytes
///
/// Returns lowercase hex string of length 64.
#[inline]
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
