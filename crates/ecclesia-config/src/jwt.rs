//! Token verification settings.
//!
//! Access tokens are issued by the external identity provider and signed with
//! a shared HS256 secret. The service only verifies them; `access_token_expiry`
//! is used when minting development tokens from the CLI and in tests.

use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    /// Expected `aud` claim. `None` disables audience validation.
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            audience: env::var("JWT_AUDIENCE").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Config with an explicit secret and no audience check.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: 3600,
            audience: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_secret_defaults() {
        let config = JwtConfig::with_secret("test-secret");
        assert_eq!(config.secret, "test-secret");
        assert_eq!(config.access_token_expiry, 3600);
        assert!(config.audience.is_none());
    }
}
