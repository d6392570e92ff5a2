//! The user as seen by the access model.

use ecclesia_auth::Claims;
use ecclesia_core::evaluator::{accessible_modules, has_module_access, has_permission};
use ecclesia_core::permissions::{Action, Module};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::guard::{GuardRequest, evaluate_guard};
use crate::roles::{Role, RoleCapability};

/// Role and grants of one user, materialized by the identity provider.
///
/// The role is kept as the raw provider string. An unrecognized role has no
/// capabilities and never satisfies a role guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub id: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl From<Claims> for UserSnapshot {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            permissions: claims.permissions,
        }
    }
}

impl UserSnapshot {
    /// The role, if it is one of the known roles.
    pub fn known_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        has_permission(&self.permissions, permission)
    }

    pub fn has_module_access(&self, module: Module, action: Option<Action>) -> bool {
        has_module_access(&self.permissions, module, action)
    }

    pub fn has_capability(&self, capability: RoleCapability) -> bool {
        self.known_role()
            .is_some_and(|role| role.has_capability(capability))
    }

    pub fn can(&self, request: &GuardRequest) -> bool {
        evaluate_guard(&self.role, &self.permissions, request)
    }

    pub fn profile(&self) -> AccessProfile {
        AccessProfile {
            user_id: self.id.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            recognized_role: self.known_role(),
            permissions: self.permissions.clone(),
            capabilities: self
                .known_role()
                .map(|r| r.capabilities())
                .unwrap_or_default(),
            modules: accessible_modules(&self.permissions),
        }
    }
}

/// What the current user may do, for client-side gating.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessProfile {
    pub user_id: String,
    pub email: String,
    /// Role string exactly as issued
    pub role: String,
    /// `null` when the role is not one of the known roles
    pub recognized_role: Option<Role>,
    pub permissions: Vec<String>,
    pub capabilities: Vec<RoleCapability>,
    /// Modules with at least one granted capability
    pub modules: Vec<Module>,
}
