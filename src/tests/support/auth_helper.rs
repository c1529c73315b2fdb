use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider,
};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::stubs::StubUserQuery;

pub fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        password_hash: "hashed:secret1".to_string(),
        phone: "+62 812 0000 0000".to_string(),
        address: "Jl. Sudirman 1, Jakarta".to_string(),
        answer: "blue".to_string(),
        role: Role::User,
        created_at: now,
        updated_at: now,
    }
}

/// Reversible stand-in for bcrypt: `secret` hashes to `hashed:secret`.
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Accepts any token as `user_id`, or rejects every token.
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn valid(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok(format!("token-{}", user_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub,
            role: 0,
            exp: now + 3600,
            iat: now,
            nbf: now,
        })
    }
}

pub fn token_provider_data(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

/// Builder whose user store knows one admin; returns that admin's id.
pub fn admin_state_builder() -> (TestAppStateBuilder, Uuid) {
    let mut admin = sample_user();
    admin.role = Role::Admin;
    let admin_id = admin.id;

    let builder = TestAppStateBuilder::default().with_user_query(StubUserQuery::returning(Some(admin)));
    (builder, admin_id)
}
