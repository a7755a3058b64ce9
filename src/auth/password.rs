use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password with bcrypt.
///
/// bcrypt salts internally, so hashing the same password twice yields two
/// different strings, and the cost factor keeps the digest deliberately slow.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A malformed or truncated hash counts as a verification failure rather than
/// an error, so callers get a plain bool either way.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}
