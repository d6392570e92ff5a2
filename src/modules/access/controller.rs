use axum::{Json, extract::Path};
use ecclesia_core::AppError;
use ecclesia_models::{
    AccessProfile, GuardDecision, GuardRequest, RoleChange, RoleChangeDto, RoleDefaults,
    ValidateAssignmentDto, ValidationResult,
};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{AuthUser, RequireUsersView};
use crate::validator::ValidatedJson;

use super::service::AccessService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Role, grants, capabilities and accessible modules of the caller
#[utoipa::path(
    get,
    path = "/api/access/me",
    responses(
        (status = 200, description = "Access profile of the caller", body = AccessProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.0.id))]
pub async fn get_me(auth_user: AuthUser) -> Json<AccessProfile> {
    Json(AccessService::profile(&auth_user.0))
}

/// Evaluate a guard request for the caller
///
/// Exactly one criterion is evaluated: `permission`, else `module` (with
/// optional `action`), else `role`. A request with no criterion is denied.
#[utoipa::path(
    post,
    path = "/api/access/check",
    request_body = GuardRequest,
    responses(
        (status = 200, description = "Guard decision", body = GuardDecision),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.0.id))]
pub async fn check_access(
    auth_user: AuthUser,
    ValidatedJson(request): ValidatedJson<GuardRequest>,
) -> Json<GuardDecision> {
    Json(AccessService::check(&auth_user.0, &request))
}

/// Default permissions and capabilities of every role
#[utoipa::path(
    get,
    path = "/api/access/roles",
    responses(
        (status = 200, description = "Default permission table", body = Vec<RoleDefaults>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires users.view", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Roles"
)]
#[instrument(skip_all)]
pub async fn get_roles(_user: RequireUsersView) -> Json<Vec<RoleDefaults>> {
    Json(AccessService::default_table())
}

/// Default permissions and capabilities of one role
#[utoipa::path(
    get,
    path = "/api/access/roles/{role}",
    params(
        ("role" = String, Path, description = "Role name as stored, e.g. Tesoureiro")
    ),
    responses(
        (status = 200, description = "Role defaults", body = RoleDefaults),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires users.view", body = ErrorResponse),
        (status = 404, description = "Unknown role", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Roles"
)]
#[instrument(skip_all, fields(role = %role))]
pub async fn get_role(
    _user: RequireUsersView,
    Path(role): Path<String>,
) -> Result<Json<RoleDefaults>, AppError> {
    let defaults = AccessService::role_defaults(&role)?;
    Ok(Json(defaults))
}

/// Check a permission assignment against a role
///
/// Advisory only: the result lists errors, warnings and suggestions but
/// nothing is stored or rejected.
#[utoipa::path(
    post,
    path = "/api/access/assignments/validate",
    request_body = ValidateAssignmentDto,
    responses(
        (status = 200, description = "Validation report", body = ValidationResult),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - role cannot manage users", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Assignments"
)]
#[instrument(skip_all, fields(role = %dto.role))]
pub async fn validate_assignment(
    ValidatedJson(dto): ValidatedJson<ValidateAssignmentDto>,
) -> Json<ValidationResult> {
    Json(AccessService::validate(&dto))
}

/// Compute the grant list after a role change
///
/// The new list is exactly the new role's defaults; previous grants outside
/// them are returned in `discarded`.
#[utoipa::path(
    post,
    path = "/api/access/assignments/role-change",
    request_body = RoleChangeDto,
    responses(
        (status = 200, description = "New grant list", body = RoleChange),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - role cannot manage users", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Assignments"
)]
#[instrument(skip_all, fields(role = %dto.role))]
pub async fn change_role(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RoleChangeDto>,
) -> Json<RoleChange> {
    Json(AccessService::change_role(&auth_user.0, &dto))
}
