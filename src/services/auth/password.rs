//! bcrypt senha hashing.
//!
//! The salt lives inside the produced hash, and `bcrypt::verify` recomputes
//! and compares in constant time. Hashing is CPU-bound, so both operations
//! run on the blocking thread pool instead of the async workers.

use bcrypt::DEFAULT_COST;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(String),
}

/// Hash a plaintext senha. `cost` defaults to the crate's recommended cost;
/// tests pass a low cost to stay fast.
pub async fn hash_password(plain: &str, cost: Option<u32>) -> Result<String, PasswordError> {
    let plain = plain.to_string();
    let cost = cost.unwrap_or(DEFAULT_COST);

    tokio::task::spawn_blocking(move || {
        bcrypt::hash(plain, cost).map_err(|e| PasswordError::Bcrypt(e.to_string()))
    })
    .await
    .map_err(|e| PasswordError::Bcrypt(format!("join error: {e}")))?
}

/// Check a plaintext senha against a stored bcrypt hash.
///
/// `Ok(false)` is a mismatch; `Err` means the stored hash itself is unusable
/// (corrupt record), which callers must not report as a failed login.
pub async fn verify_password(plain: &str, hashed: &str) -> Result<bool, PasswordError> {
    let plain = plain.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::verify(plain, &hashed).map_err(|e| PasswordError::Bcrypt(e.to_string()))
    })
    .await
    .map_err(|e| PasswordError::Bcrypt(format!("join error: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost; production uses DEFAULT_COST.
    pub(crate) const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hash_and_verify() {
        let hash = hash_password("pw1", Some(TEST_COST)).await.unwrap();
        assert_ne!(hash, "pw1");
        assert!(verify_password("pw1", &hash).await.unwrap());
        assert!(!verify_password("pw2", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_senha_hashes_differently() {
        // Per-record salt: two hashes of the same senha must differ.
        let a = hash_password("pw1", Some(TEST_COST)).await.unwrap();
        let b = hash_password("pw1", Some(TEST_COST)).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn corrupt_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("pw1", "not-a-bcrypt-hash").await.is_err());
    }
}
