use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use ecclesia_core::permissions::{Action, Module};
use ecclesia_models::{
    AccessProfile, GuardCriterion, GuardDecision, GuardRequest, Role, RoleCapability, RoleChange,
    RoleChangeDto, RoleDefaults, ValidateAssignmentDto, ValidationResult,
};

use crate::modules::access::controller::ErrorResponse;
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::access::controller::get_me,
        crate::modules::access::controller::check_access,
        crate::modules::access::controller::get_roles,
        crate::modules::access::controller::get_role,
        crate::modules::access::controller::validate_assignment,
        crate::modules::access::controller::change_role,
    ),
    components(
        schemas(
            Module,
            Action,
            Role,
            RoleCapability,
            RoleDefaults,
            AccessProfile,
            GuardRequest,
            GuardCriterion,
            GuardDecision,
            ValidateAssignmentDto,
            ValidationResult,
            RoleChangeDto,
            RoleChange,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Access", description = "Caller profile and guard evaluation"),
        (name = "Roles", description = "Default permission table"),
        (name = "Assignments", description = "Permission assignment tooling for user managers")
    ),
    info(
        title = "Ecclesia Access API",
        version = "0.1.0",
        description = "Role and permission model for church management: default grants, guard evaluation and assignment checks.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
