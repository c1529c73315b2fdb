use crate::shared::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::WeakJwtSecret);
        }

        // Sessions last a week by default
        let access_token_expiry: i64 = parse_or("JWT_EXPIRY", 604_800)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret_key,
            access_token_expiry,
        })
    }
}
