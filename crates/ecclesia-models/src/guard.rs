//! Guard evaluation: the single decision point for a protected region.
//!
//! A [`GuardRequest`] may carry several criteria but only one is evaluated,
//! in this order:
//!
//! 1. `permission`: exact membership in the grant list
//! 2. `module` (with optional `action`): module-level access
//! 3. `role`: equality with the user's role
//!
//! A request with no criteria is denied.

use ecclesia_core::evaluator::{has_module_access, has_permission};
use ecclesia_core::permissions::{Action, Module};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::roles::Role;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GuardRequest {
    #[validate(length(max = 128, message = "Permission must not exceed 128 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
    /// Only consulted together with `module`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// The criterion a guard request is decided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GuardCriterion {
    Permission,
    Module,
    Role,
    /// No criteria supplied; always denied.
    None,
}

impl GuardCriterion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuardCriterion::Permission => "permission",
            GuardCriterion::Module => "module",
            GuardCriterion::Role => "role",
            GuardCriterion::None => "none",
        }
    }
}

impl GuardRequest {
    pub fn permission(permission: impl Into<String>) -> Self {
        Self {
            permission: Some(permission.into()),
            ..Self::default()
        }
    }

    pub fn module(module: Module, action: Option<Action>) -> Self {
        Self {
            module: Some(module),
            action,
            ..Self::default()
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn admin_only() -> Self {
        Self::role(Role::Administrator)
    }

    pub fn treasurer_only() -> Self {
        Self::role(Role::Treasurer)
    }

    /// Which criterion decides this request.
    pub fn criterion(&self) -> GuardCriterion {
        if self.permission.is_some() {
            GuardCriterion::Permission
        } else if self.module.is_some() {
            GuardCriterion::Module
        } else if self.role.is_some() {
            GuardCriterion::Role
        } else {
            GuardCriterion::None
        }
    }
}

/// Decide `request` for a user with role name `role` and grants `granted`.
///
/// An unrecognized role name never satisfies a role criterion.
pub fn evaluate_guard<S: AsRef<str>>(role: &str, granted: &[S], request: &GuardRequest) -> bool {
    if let Some(permission) = &request.permission {
        has_permission(granted, permission)
    } else if let Some(module) = request.module {
        has_module_access(granted, module, request.action)
    } else if let Some(required) = request.role {
        role.parse::<Role>().is_ok_and(|r| r == required)
    } else {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuardDecision {
    pub granted: bool,
    pub criterion: GuardCriterion,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grants(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn all_member_grants() -> Vec<String> {
        Action::ALL
            .iter()
            .map(|a| format!("members.{}", a))
            .collect()
    }

    #[test]
    fn test_permission_criterion() {
        let granted = grants(&["members.view"]);
        assert!(evaluate_guard("Membro", &granted, &GuardRequest::permission("members.view")));
        assert!(!evaluate_guard(
            "Membro",
            &granted,
            &GuardRequest::permission("members.viewall")
        ));
    }

    #[test]
    fn test_permission_takes_priority_over_module() {
        let granted = all_member_grants();
        let request = GuardRequest {
            permission: Some("x".to_string()),
            module: Some(Module::Members),
            ..GuardRequest::default()
        };

        assert!(has_module_access(&granted, Module::Members, None));
        assert_eq!(request.criterion(), GuardCriterion::Permission);
        assert!(!evaluate_guard("Administrador", &granted, &request));
    }

    #[test]
    fn test_module_takes_priority_over_role() {
        let granted = grants(&["events.view"]);
        let request = GuardRequest {
            module: Some(Module::Financial),
            role: Some(Role::Member),
            ..GuardRequest::default()
        };

        assert_eq!(request.criterion(), GuardCriterion::Module);
        assert!(!evaluate_guard("Membro", &granted, &request));
    }

    #[test]
    fn test_module_with_action() {
        let granted = grants(&["financial.view"]);
        assert!(evaluate_guard(
            "Pastor",
            &granted,
            &GuardRequest::module(Module::Financial, Some(Action::View))
        ));
        assert!(!evaluate_guard(
            "Pastor",
            &granted,
            &GuardRequest::module(Module::Financial, Some(Action::Edit))
        ));
        assert!(evaluate_guard(
            "Pastor",
            &granted,
            &GuardRequest::module(Module::Financial, None)
        ));
    }

    #[test]
    fn test_action_without_module_is_ignored() {
        let granted = grants(&["members.view"]);
        let request = GuardRequest {
            action: Some(Action::View),
            ..GuardRequest::default()
        };
        assert_eq!(request.criterion(), GuardCriterion::None);
        assert!(!evaluate_guard("Administrador", &granted, &request));
    }

    #[test]
    fn test_empty_permission_is_still_a_criterion() {
        let granted = all_member_grants();
        let request = GuardRequest {
            permission: Some(String::new()),
            module: Some(Module::Members),
            ..GuardRequest::default()
        };
        assert_eq!(request.criterion(), GuardCriterion::Permission);
        assert!(!evaluate_guard("Administrador", &granted, &request));
    }

    #[test]
    fn test_role_criterion() {
        let none: Vec<String> = vec![];
        assert!(evaluate_guard("Tesoureiro", &none, &GuardRequest::treasurer_only()));
        assert!(!evaluate_guard("Administrador", &none, &GuardRequest::treasurer_only()));
        assert!(evaluate_guard("Administrador", &none, &GuardRequest::admin_only()));
        assert!(!evaluate_guard("Bispo", &none, &GuardRequest::admin_only()));
        assert!(!evaluate_guard("administrador", &none, &GuardRequest::admin_only()));
    }

    #[test]
    fn test_no_criteria_denies() {
        let granted = all_member_grants();
        let request = GuardRequest::default();
        assert_eq!(request.criterion(), GuardCriterion::None);
        assert!(!evaluate_guard("Administrador", &granted, &request));
    }

    #[test]
    fn test_guard_request_deserialize() {
        let request: GuardRequest =
            serde_json::from_str(r#"{"module":"members","action":"create"}"#).unwrap();
        assert_eq!(request.module, Some(Module::Members));
        assert_eq!(request.action, Some(Action::Create));
        assert!(request.permission.is_none());

        let request: GuardRequest = serde_json::from_str(r#"{"role":"Líder"}"#).unwrap();
        assert_eq!(request.role, Some(Role::Leader));

        let empty: GuardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GuardRequest::default());
    }

    #[test]
    fn test_guard_request_validation() {
        assert!(GuardRequest::permission("members.view").validate().is_ok());
        assert!(GuardRequest::permission("x".repeat(129)).validate().is_err());
    }

    #[test]
    fn test_guard_decision_serialize() {
        let decision = GuardDecision {
            granted: false,
            criterion: GuardCriterion::None,
        };
        assert_eq!(
            serde_json::to_string(&decision).unwrap(),
            r#"{"granted":false,"criterion":"none"}"#
        );
    }
}
