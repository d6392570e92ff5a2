//! Role-gated authorization middleware for Axum
//!
//! Capabilities such as managing users belong to the role itself and are not
//! affected by the user's grant list. These layers check the role from the
//! verified token.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use ecclesia_core::AppError;
use ecclesia_models::{Role, RoleCapability};
use ecclesia_observability::{track_access_denied, track_guard_decision};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Middleware function that checks if the authenticated user's role holds
/// `capability`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/validate", post(handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_capability(state, req, next, RoleCapability::ManageUsers),
///     ));
/// ```
pub async fn require_capability(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    capability: RoleCapability,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_capability(&auth_user, capability)?;
    // Handlers behind this layer extract the verified user without decoding again
    parts.extensions.insert(auth_user);

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Routes for whoever may manage users and their grants (Administrador)
pub async fn require_user_manager(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_capability(State(state), req, next, RoleCapability::ManageUsers).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Fail with 403 unless the caller's role holds `capability`.
pub fn check_capability(auth_user: &AuthUser, capability: RoleCapability) -> Result<(), AppError> {
    let granted = auth_user.0.has_capability(capability);
    track_guard_decision("role", granted);

    if !granted {
        track_access_denied("missing_capability");
        let holders: Vec<&str> = capability.holders().iter().map(Role::as_str).collect();
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {}, but user has role: {}",
            holders.join(", "),
            auth_user.role()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use ecclesia_models::{UserSnapshot, default_permissions_for};

    fn auth_user(role: &str, permissions: Vec<String>) -> AuthUser {
        AuthUser(UserSnapshot {
            id: "u-1".to_string(),
            email: "user@igreja.org".to_string(),
            role: role.to_string(),
            permissions,
        })
    }

    #[test]
    fn test_check_capability_by_role() {
        let admin = auth_user("Administrador", vec![]);
        assert!(check_capability(&admin, RoleCapability::ManageUsers).is_ok());
        assert!(check_capability(&admin, RoleCapability::EditFinancial).is_ok());

        let treasurer = auth_user("Tesoureiro", vec![]);
        assert!(check_capability(&treasurer, RoleCapability::EditFinancial).is_ok());

        let pastor = auth_user("Pastor", default_permissions_for(Role::Pastor));
        let err = check_capability(&pastor, RoleCapability::EditFinancial).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert!(err.error.to_string().contains("Tesoureiro"));
        assert!(err.error.to_string().contains("Pastor"));
        assert!(check_capability(&pastor, RoleCapability::ManageUsers).is_err());
    }

    #[test]
    fn test_check_capability_ignores_grants() {
        let member = auth_user("Membro", default_permissions_for(Role::Administrator));
        assert!(check_capability(&member, RoleCapability::ManageUsers).is_err());
    }
}
