//! Advisory checks of a grant list against a role.
//!
//! [`validate_assignment`] never blocks anything: callers show its messages to
//! the administrator editing a user and save regardless. `is_valid` only
//! reflects whether hard errors were found.

use ecclesia_core::evaluator::has_permission;
use ecclesia_core::permissions::{
    Action, FINANCIAL_EDIT, FINANCIAL_VIEW, MEMBERS_CREATE, Permission, SEPARATOR,
    USERS_PERMISSIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;
use validator::Validate;

use crate::roles::Role;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Check `granted` against what `role` is expected to hold.
///
/// Deterministic and side-effect free. Duplicate grants are counted once.
pub fn validate_assignment<S: AsRef<str>>(role: Role, granted: &[S]) -> ValidationResult {
    validate(Some(role), role.as_str(), granted)
}

/// [`validate_assignment`] for a role given by its stored name.
///
/// An unrecognized name is not rejected: it has no defaults, so every grant
/// counts as extra, and no role rule applies.
pub fn validate_assignment_for_name<S: AsRef<str>>(role: &str, granted: &[S]) -> ValidationResult {
    validate(role.parse().ok(), role, granted)
}

fn validate<S: AsRef<str>>(role: Option<Role>, name: &str, granted: &[S]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut suggestions = Vec::new();

    if role.is_none() {
        warnings.push(format!("Unknown role {} has no default permissions", name));
    }

    let defaults: BTreeSet<String> = role
        .map(|r| r.default_permissions())
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect();
    let granted_set: BTreeSet<&str> = granted.iter().map(AsRef::<str>::as_ref).collect();

    let missing = defaults
        .iter()
        .filter(|d| !granted_set.contains(d.as_str()))
        .count();
    if missing > 0 {
        warnings.push(format!(
            "{} default permission(s) of the {} role are not granted",
            missing, name
        ));
    }

    let extra = granted_set
        .iter()
        .filter(|g| !defaults.contains(**g))
        .count();
    if extra > 0 {
        warnings.push(format!(
            "{} permission(s) granted beyond the {} role defaults",
            extra, name
        ));
    }

    let unrecognized: Vec<&str> = granted_set
        .iter()
        .copied()
        .filter(|g| !Permission::is_well_formed(g))
        .collect();
    if !unrecognized.is_empty() {
        warnings.push(format!(
            "Unrecognized permission(s) will never match: {}",
            unrecognized.join(", ")
        ));
    }

    match role {
        None => {}
        Some(Role::Treasurer) => {
            if !has_permission(granted, FINANCIAL_VIEW) {
                errors.push(format!("The {} role requires {}", name, FINANCIAL_VIEW));
            }
            if !has_permission(granted, FINANCIAL_EDIT) {
                warnings.push(format!(
                    "The {} role is expected to have {}",
                    name, FINANCIAL_EDIT
                ));
            }
        }
        Some(Role::Administrator) => {
            if !has_permission(granted, USERS_PERMISSIONS) {
                errors.push(format!("The {} role requires {}", name, USERS_PERMISSIONS));
            }
        }
        Some(Role::Member) => {
            let deletes: Vec<&str> = granted_set
                .iter()
                .copied()
                .filter(|g| is_delete(g))
                .collect();
            if !deletes.is_empty() {
                warnings.push(format!(
                    "Security: the {} role holds delete permission(s): {}",
                    name,
                    deletes.join(", ")
                ));
            }
        }
        Some(Role::Leader) => {
            if !has_permission(granted, MEMBERS_CREATE) {
                suggestions.push(format!(
                    "Consider granting {} to the {} role",
                    MEMBERS_CREATE, name
                ));
            }
        }
        Some(Role::Pastor | Role::Volunteer) => {}
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        warnings,
        errors,
        suggestions,
    }
}

/// Action component is `delete`, whether or not the module is recognized.
fn is_delete(permission: &str) -> bool {
    permission
        .rsplit_once(SEPARATOR)
        .is_some_and(|(_, action)| action == Action::Delete.as_str())
}

// DTOs

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ValidateAssignmentDto {
    /// Role name as stored; unrecognized names validate against no defaults
    #[validate(length(max = 64, message = "Role must not exceed 64 characters"))]
    pub role: String,
    #[validate(length(max = 256, message = "At most 256 permissions may be submitted"))]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::default_permissions_for;
    use fake::Fake;
    use fake::faker::lorem::en::Word;

    #[test]
    fn test_treasurer_without_grants_is_invalid() {
        let result = validate_assignment::<&str>(Role::Treasurer, &[]);

        assert!(!result.is_valid);
        assert!(!result.errors.is_empty());
        assert!(result.errors.iter().any(|e| e.contains("financial.view")));
        assert!(result.warnings.iter().any(|w| w.contains("financial.edit")));
    }

    #[test]
    fn test_treasurer_with_view_only_is_valid_with_warning() {
        let result = validate_assignment(Role::Treasurer, &["financial.view"]);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.iter().any(|w| w.contains("financial.edit")));
    }

    #[test]
    fn test_administrator_with_defaults_is_valid() {
        let mut granted = vec!["users.permissions".to_string()];
        granted.extend(default_permissions_for(Role::Administrator));

        let result = validate_assignment(Role::Administrator, &granted);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_administrator_without_users_permissions_is_invalid() {
        let result = validate_assignment(Role::Administrator, &["dashboard.view"]);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("users.permissions"));
    }

    #[test]
    fn test_missing_and_extra_counts() {
        // Member defaults: dashboard.view, events.view, notifications.view
        let result = validate_assignment(
            Role::Member,
            &["dashboard.view", "members.view", "members.export"],
        );

        assert!(result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("2 default permission(s)"))
        );
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("2 permission(s) granted beyond"))
        );
    }

    #[test]
    fn test_duplicates_counted_once() {
        let result = validate_assignment(
            Role::Member,
            &[
                "dashboard.view",
                "events.view",
                "notifications.view",
                "settings.view",
                "settings.view",
            ],
        );
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("1 permission(s) granted beyond"))
        );
    }

    #[test]
    fn test_member_with_delete_warns() {
        let result = validate_assignment(
            Role::Member,
            &["dashboard.view", "events.view", "notifications.view", "events.delete"],
        );

        assert!(result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("Security") && w.contains("events.delete"))
        );
    }

    #[test]
    fn test_delete_heuristic_only_for_member() {
        let result = validate_assignment(Role::Volunteer, &["events.delete"]);
        assert!(!result.warnings.iter().any(|w| w.starts_with("Security")));
    }

    #[test]
    fn test_leader_suggestion() {
        let defaults = default_permissions_for(Role::Leader);
        let result = validate_assignment(Role::Leader, &defaults);

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].contains("members.create"));

        let mut with_create = defaults.clone();
        with_create.push("members.create".to_string());
        let result = validate_assignment(Role::Leader, &with_create);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_unrecognized_permissions_warn() {
        let result = validate_assignment(Role::Volunteer, &["members.viewall", "choir.view"]);

        let warning = result
            .warnings
            .iter()
            .find(|w| w.starts_with("Unrecognized"))
            .unwrap();
        assert!(warning.contains("choir.view"));
        assert!(warning.contains("members.viewall"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_defaults_produce_no_hard_errors() {
        for role in Role::ALL {
            let result = validate_assignment(role, &default_permissions_for(role));
            assert!(result.is_valid, "{}", role);
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let granted: Vec<String> = (0..8).map(|_| Word().fake::<String>()).collect();
        let first = validate_assignment(Role::Pastor, &granted);
        let second = validate_assignment(Role::Pastor, &granted);
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_assignment_dto() {
        let dto = ValidateAssignmentDto {
            role: "Membro".to_string(),
            permissions: vec!["events.view".to_string()],
        };
        assert!(dto.validate().is_ok());

        let too_many = ValidateAssignmentDto {
            role: "Membro".to_string(),
            permissions: vec!["events.view".to_string(); 257],
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_validate_assignment_dto_deserialize() {
        let dto: ValidateAssignmentDto =
            serde_json::from_str(r#"{"role":"Tesoureiro","permissions":["financial.view"]}"#)
                .unwrap();
        assert_eq!(dto.role, "Tesoureiro");

        let unknown: ValidateAssignmentDto =
            serde_json::from_str(r#"{"role":"Bispo","permissions":[]}"#).unwrap();
        assert_eq!(unknown.role, "Bispo");
    }

    #[test]
    fn test_unknown_role_has_no_defaults() {
        let result = validate_assignment_for_name("Bispo", &["members.view", "events.delete"]);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("Unknown role Bispo"))
        );
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with("2 permission(s) granted beyond the Bispo"))
        );
        assert!(!result.warnings.iter().any(|w| w.contains("not granted")));
        assert!(!result.warnings.iter().any(|w| w.starts_with("Security")));
    }

    #[test]
    fn test_unknown_role_with_no_grants() {
        let result = validate_assignment_for_name::<&str>("administrador", &[]);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_known_name_matches_typed_role() {
        let granted = ["financial.view"];
        assert_eq!(
            validate_assignment_for_name("Tesoureiro", &granted),
            validate_assignment(Role::Treasurer, &granted)
        );
    }
}
