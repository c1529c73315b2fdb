use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::token_provider::{TokenClaims, TokenError, TokenProvider},
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            role: role.code(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_expiry(expiry: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "FAKE_JWT_SECRET_DO_NOT_USE_IN_PRODUCTION".to_string(),
            access_token_expiry: expiry,
        })
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service_with_expiry(3600);
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, Role::Admin)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, 1);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = service_with_expiry(3600);

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_with_invalid_json() {
        use base64::{engine::general_purpose, Engine as _};
        let service = service_with_expiry(3600);

        let header = general_purpose::STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::STANDARD.encode("not valid json");
        let invalid_token = format!("{}.{}.fakesignature", header, payload);

        assert!(service.verify_token(&invalid_token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Beyond the 30s leeway
        let service = service_with_expiry(-35);

        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn test_invalid_signature() {
        let service = service_with_expiry(3600);
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: "ANOTHER_SECRET_THAT_IS_LONG_ENOUGH_1234".to_string(),
            access_token_expiry: 3600,
        });

        assert!(matches!(
            other.verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }
}
