// Password hashing.

use bcrypt::{hash, verify};
use maitred_core::{Error, Result};

/// Hash a plaintext credential with the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).map_err(|e| Error::general_error(e.to_string()))
}

/// Check a plaintext credential against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    verify(password, password_hash).map_err(|e| Error::general_error(e.to_string()))
}
