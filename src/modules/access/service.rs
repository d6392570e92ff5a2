use anyhow::anyhow;
use ecclesia_core::AppError;
use ecclesia_models::{
    AccessProfile, GuardDecision, GuardRequest, Role, RoleChange, RoleChangeDto, RoleDefaults,
    UserSnapshot, ValidateAssignmentDto, ValidationResult, apply_role_change_for_name,
    validate_assignment_for_name,
};
use ecclesia_observability::{track_assignment_validated, track_guard_decision, track_role_change};
use tracing::{debug, info, warn};

pub struct AccessService;

impl AccessService {
    pub fn profile(user: &UserSnapshot) -> AccessProfile {
        let profile = user.profile();
        if profile.recognized_role.is_none() {
            warn!(user_id = %user.id, role = %user.role, "Token carries an unrecognized role");
        }
        profile
    }

    pub fn check(user: &UserSnapshot, request: &GuardRequest) -> GuardDecision {
        let criterion = request.criterion();
        let granted = user.can(request);

        track_guard_decision(criterion.as_str(), granted);
        debug!(
            user_id = %user.id,
            criterion = criterion.as_str(),
            granted,
            "Guard evaluated"
        );

        GuardDecision { granted, criterion }
    }

    pub fn default_table() -> Vec<RoleDefaults> {
        RoleDefaults::table()
    }

    /// Defaults for a role given by its stored name.
    pub fn role_defaults(name: &str) -> Result<RoleDefaults, AppError> {
        let role: Role = name
            .parse()
            .map_err(|_| AppError::not_found(anyhow!("Role not found: {}", name)))?;
        Ok(RoleDefaults::from(role))
    }

    pub fn validate(dto: &ValidateAssignmentDto) -> ValidationResult {
        let result = validate_assignment_for_name(&dto.role, &dto.permissions);

        track_assignment_validated(role_label(&dto.role), result.is_valid);
        if !result.is_valid {
            info!(
                role = %dto.role,
                errors = result.errors.len(),
                "Permission assignment has errors"
            );
        }

        result
    }

    pub fn change_role(actor: &UserSnapshot, dto: &RoleChangeDto) -> RoleChange {
        let change = apply_role_change_for_name(&dto.current_permissions, &dto.role);

        track_role_change(role_label(&dto.role), change.discarded.len());
        info!(
            actor = %actor.id,
            role = %dto.role,
            discarded = change.discarded.len(),
            "Role change computed"
        );

        change
    }
}

/// Metric label for a role name; free-form names are folded into `unknown`.
fn role_label(name: &str) -> &'static str {
    name.parse::<Role>().map(|r| r.as_str()).unwrap_or("unknown")
}
