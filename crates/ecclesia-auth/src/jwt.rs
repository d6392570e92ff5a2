//! JWT utilities.
//!
//! Verification is the production path: the service checks the signature and
//! expiry of tokens issued by the identity provider. Minting exists so the CLI
//! can produce development tokens and tests can exercise the HTTP layer.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use ecclesia_config::JwtConfig;
use ecclesia_core::AppError;

use crate::claims::Claims;

/// Creates an access token carrying a role and permission list.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: &str,
    permissions: Vec<String>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        permissions,
        aud: jwt_config.audience.clone(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, the audience does not match, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    match &jwt_config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
