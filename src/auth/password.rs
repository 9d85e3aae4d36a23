use crate::core::error::ServiceError;

/// Hash a plaintext password with bcrypt at the given cost factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, ServiceError> {
    bcrypt::hash(password, cost).map_err(|e| ServiceError::Store(e.to_string()))
}

/// Check a plaintext password against a stored bcrypt hash. A malformed
/// stored hash counts as a mismatch rather than an error so login failures
/// stay indistinguishable from unknown users.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
