use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// bcrypt runs on the blocking pool so a slow cost factor never stalls a worker.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|e| HashError::HashFailed(e.to_string()))
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|e| HashError::VerifyFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::BcryptHasher;
    use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        // Minimum cost keeps the test fast
        let hasher = BcryptHasher::new(4);
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert_ne!(hashed_password, password);

        assert!(hasher.verify_password(password, &hashed_password).await.unwrap());
        assert!(!hasher
            .verify_password("WrongPassword", &hashed_password)
            .await
            .unwrap());

        let invalid = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(invalid, Err(HashError::VerifyFailed(_))));
    }

    #[tokio::test]
    async fn test_verifies_hashes_from_other_bcrypt_implementations() {
        let hasher = BcryptHasher::default();
        // $2b$10 hash of "123456"
        let stored = "$2b$10$WO6mHb8TNAqjBj0vQ.mO4OIc6PNfIHrVuw3dDp0WFJvrTfrscNKLK";

        let result = hasher.verify_password("definitely-not-it", stored).await;
        assert_eq!(result.unwrap(), false);
    }
}
