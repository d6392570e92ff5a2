use ecclesia_auth::create_access_token;
use ecclesia_config::JwtConfig;
use ecclesia_core::{AppError, ParseError};
use ecclesia_models::{
    GuardDecision, GuardRequest, Role, RoleChange, RoleDefaults, ValidationResult,
    apply_role_change_for_name, validate_assignment_for_name,
};
use uuid::Uuid;

/// Split a comma-separated permission list, trimming blanks.
pub fn parse_permission_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn roles_table() -> Vec<RoleDefaults> {
    RoleDefaults::table()
}

pub fn defaults(role: &str) -> Result<RoleDefaults, ParseError> {
    Ok(RoleDefaults::from(role.parse::<Role>()?))
}

/// Unrecognized role names are validated against no defaults.
pub fn validate(role: &str, permissions: &[String]) -> ValidationResult {
    validate_assignment_for_name(role, permissions)
}

/// Evaluate `request` for a user holding `role` and `permissions`.
///
/// The role is taken as given, so unknown role names can be tried too.
pub fn check(role: &str, permissions: &[String], request: &GuardRequest) -> GuardDecision {
    GuardDecision {
        granted: ecclesia_models::evaluate_guard(role, permissions, request),
        criterion: request.criterion(),
    }
}

pub fn role_change(previous: &[String], role: &str) -> RoleChange {
    apply_role_change_for_name(previous, role)
}

/// Claims of a development token.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

/// Mint a token signed with the local secret, standing in for the identity
/// provider during development.
pub fn mint_token(request: &TokenRequest, jwt_config: &JwtConfig) -> Result<String, AppError> {
    create_access_token(
        request.user_id,
        &request.email,
        &request.role,
        request.permissions.clone(),
        jwt_config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecclesia_auth::verify_token;
    use ecclesia_core::permissions::Module;
    use ecclesia_models::{GuardCriterion, default_permissions_for};

    #[test]
    fn test_parse_permission_list() {
        assert_eq!(
            parse_permission_list(" members.view, ,events.create,"),
            vec!["members.view", "events.create"]
        );
        assert!(parse_permission_list("").is_empty());
    }

    #[test]
    fn test_defaults_by_name() {
        let row = defaults("Tesoureiro").unwrap();
        assert_eq!(row.role, Role::Treasurer);
        assert!(defaults("tesoureiro").is_err());
    }

    #[test]
    fn test_roles_table() {
        let table = roles_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table[5].role, Role::Member);
    }

    #[test]
    fn test_validate_unknown_role() {
        let report = validate("Bispo", &["events.view".to_string()]);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("Bispo")));
    }

    #[test]
    fn test_validate_treasurer() {
        let report = validate("Tesoureiro", &[]);
        assert!(!report.is_valid);
    }

    #[test]
    fn test_check() {
        let granted = default_permissions_for(Role::Volunteer);

        let request = GuardRequest::module(Module::Departments, None);
        let decision = check("Voluntário", &granted, &request);
        assert!(decision.granted);
        assert_eq!(decision.criterion, GuardCriterion::Module);

        let decision = check("Voluntário", &granted, &GuardRequest::default());
        assert!(!decision.granted);
        assert_eq!(decision.criterion, GuardCriterion::None);
    }

    #[test]
    fn test_role_change() {
        let previous = default_permissions_for(Role::Member);
        let change = role_change(&previous, "Administrador");
        assert_eq!(change.permissions, default_permissions_for(Role::Administrator));

        let unknown = role_change(&previous, "Admin");
        assert!(unknown.permissions.is_empty());
        assert_eq!(unknown.discarded, previous);
    }

    #[test]
    fn test_mint_token_round_trip() {
        let config = JwtConfig::with_secret("cli-test-secret");
        let request = TokenRequest {
            user_id: Uuid::new_v4(),
            email: "pastor@igreja.org".to_string(),
            role: "Pastor".to_string(),
            permissions: default_permissions_for(Role::Pastor),
        };

        let token = mint_token(&request, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, request.user_id.to_string());
        assert_eq!(claims.role, "Pastor");
        assert_eq!(claims.permissions, request.permissions);
    }
}
