use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use ecclesia_auth::verify_token;
use ecclesia_core::AppError;
use ecclesia_models::UserSnapshot;
use ecclesia_observability::track_access_denied;

use crate::state::AppState;

/// Extractor that validates the bearer token and exposes the caller's role and
/// grants.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserSnapshot);

impl AuthUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.0.has_permission(permission)
    }

    /// Role string as issued by the identity provider
    pub fn role(&self) -> &str {
        &self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already verified by a route layer
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                track_access_denied("missing_token");
                AppError::unauthorized("Missing authorization header".to_string())
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            track_access_denied("malformed_token");
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config).inspect_err(|_| {
            track_access_denied("invalid_token");
        })?;

        Ok(AuthUser(UserSnapshot::from(claims)))
    }
}

/// Helper macro to create permission check extractors for common permissions.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = ecclesia_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                let granted = auth_user.has_permission($permission);
                ecclesia_observability::track_guard_decision("permission", granted);

                if !granted {
                    ecclesia_observability::track_access_denied("missing_permission");
                    return Err(ecclesia_core::AppError::forbidden(format!(
                        "Access denied. Missing required permission: {}",
                        $permission
                    )));
                }

                Ok($name(auth_user))
            }
        }
    };
}

// Users permissions
require_permission!(RequireUsersView, ecclesia_core::permissions::USERS_VIEW);
