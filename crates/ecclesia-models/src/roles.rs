//! Roles, their default permissions and role-intrinsic capabilities.
//!
//! Two authorization axes live here and are kept apart:
//!
//! - **Default permissions**: the grant list a user receives when a role is
//!   assigned. Administrators may edit a user's grants afterwards, so a
//!   user's actual permissions can diverge from these defaults.
//! - **Role capabilities**: rights that belong to the role itself
//!   ([`RoleCapability`]). They are decided from the role alone and no
//!   per-user permission edit can grant or revoke them.

use ecclesia_core::permissions::{Action, Module, ParseError, Permission};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// A church role. The serialized names are the ones stored by the identity
/// provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrator,
    #[serde(rename = "Pastor")]
    Pastor,
    #[serde(rename = "Líder")]
    Leader,
    #[serde(rename = "Tesoureiro")]
    Treasurer,
    #[serde(rename = "Voluntário")]
    Volunteer,
    #[serde(rename = "Membro")]
    Member,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Administrator,
        Role::Pastor,
        Role::Leader,
        Role::Treasurer,
        Role::Volunteer,
        Role::Member,
    ];

    /// Name as stored by the identity provider.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Pastor => "Pastor",
            Role::Leader => "Líder",
            Role::Treasurer => "Tesoureiro",
            Role::Volunteer => "Voluntário",
            Role::Member => "Membro",
        }
    }

    /// Permissions granted when this role is assigned.
    pub fn default_permissions(&self) -> &'static [Permission] {
        match self {
            Role::Administrator => ADMINISTRATOR_DEFAULTS,
            Role::Pastor => PASTOR_DEFAULTS,
            Role::Leader => LEADER_DEFAULTS,
            Role::Treasurer => TREASURER_DEFAULTS,
            Role::Volunteer => VOLUNTEER_DEFAULTS,
            Role::Member => MEMBER_DEFAULTS,
        }
    }

    pub fn has_capability(&self, capability: RoleCapability) -> bool {
        capability.holders().contains(self)
    }

    /// Role-intrinsic capabilities held by this role.
    pub fn capabilities(&self) -> Vec<RoleCapability> {
        RoleCapability::ALL
            .into_iter()
            .filter(|c| self.has_capability(*c))
            .collect()
    }

    pub fn can_edit_financial(&self) -> bool {
        self.has_capability(RoleCapability::EditFinancial)
    }

    pub fn can_manage_users(&self) -> bool {
        self.has_capability(RoleCapability::ManageUsers)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    /// Exact match on the stored name. No case folding, no accent stripping.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseError::UnknownRole(s.to_string()))
    }
}

/// A right that belongs to a role rather than to a grant list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleCapability {
    /// Edit financial records.
    EditFinancial,
    /// Manage user accounts and their permissions.
    ManageUsers,
}

impl RoleCapability {
    pub const ALL: [RoleCapability; 2] = [RoleCapability::EditFinancial, RoleCapability::ManageUsers];

    /// Roles holding this capability.
    pub const fn holders(&self) -> &'static [Role] {
        match self {
            RoleCapability::EditFinancial => &[Role::Administrator, Role::Treasurer],
            RoleCapability::ManageUsers => &[Role::Administrator],
        }
    }
}

// ============================================================================
// Default permission table
// ============================================================================

const fn p(module: Module, action: Action) -> Permission {
    Permission::new(module, action)
}

use Action::{Create, Delete, Edit, Export, Permissions, Reports, View};
use Module::{Dashboard, Departments, Events, Financial, Members, Notifications, Settings, Users};

static ADMINISTRATOR_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Members, View),
    p(Members, Create),
    p(Members, Edit),
    p(Members, Delete),
    p(Members, Export),
    p(Departments, View),
    p(Departments, Create),
    p(Departments, Edit),
    p(Departments, Delete),
    p(Events, View),
    p(Events, Create),
    p(Events, Edit),
    p(Events, Delete),
    p(Financial, View),
    p(Financial, Create),
    p(Financial, Edit),
    p(Financial, Delete),
    p(Financial, Export),
    p(Financial, Reports),
    p(Users, View),
    p(Users, Create),
    p(Users, Edit),
    p(Users, Delete),
    p(Users, Permissions),
    p(Notifications, View),
    p(Notifications, Create),
    p(Notifications, Edit),
    p(Notifications, Delete),
    p(Settings, View),
    p(Settings, Edit),
];

static PASTOR_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Members, View),
    p(Members, Create),
    p(Members, Edit),
    p(Members, Export),
    p(Departments, View),
    p(Departments, Create),
    p(Departments, Edit),
    p(Events, View),
    p(Events, Create),
    p(Events, Edit),
    p(Events, Delete),
    p(Financial, View),
    p(Financial, Reports),
    p(Users, View),
    p(Notifications, View),
    p(Notifications, Create),
    p(Settings, View),
];

static LEADER_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Members, View),
    p(Members, Edit),
    p(Departments, View),
    p(Events, View),
    p(Events, Create),
    p(Events, Edit),
    p(Notifications, View),
    p(Notifications, Create),
];

static TREASURER_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Members, View),
    p(Financial, View),
    p(Financial, Create),
    p(Financial, Edit),
    p(Financial, Delete),
    p(Financial, Export),
    p(Financial, Reports),
    p(Notifications, View),
];

static VOLUNTEER_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Members, View),
    p(Departments, View),
    p(Events, View),
    p(Notifications, View),
];

static MEMBER_DEFAULTS: &[Permission] = &[
    p(Dashboard, View),
    p(Events, View),
    p(Notifications, View),
];

/// Default grant list for `role`, as permission strings.
pub fn default_permissions_for(role: Role) -> Vec<String> {
    role.default_permissions()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Default grant list for a role name. Unrecognized names have no defaults.
pub fn default_permissions_for_name(role: &str) -> Vec<String> {
    role.parse::<Role>()
        .map(default_permissions_for)
        .unwrap_or_default()
}

/// True iff `role` names the Administrador or Tesoureiro role.
///
/// Decided from the role alone; the user's grant list is not consulted.
pub fn can_edit_financial(role: &str) -> bool {
    role.parse::<Role>().is_ok_and(|r| r.can_edit_financial())
}

/// True iff `role` names the Administrador role.
pub fn can_manage_users(role: &str) -> bool {
    role.parse::<Role>().is_ok_and(|r| r.can_manage_users())
}

// ============================================================================
// DTOs
// ============================================================================

/// One row of the default table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleDefaults {
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub capabilities: Vec<RoleCapability>,
}

impl From<Role> for RoleDefaults {
    fn from(role: Role) -> Self {
        Self {
            role,
            permissions: role.default_permissions().to_vec(),
            capabilities: role.capabilities(),
        }
    }
}

impl RoleDefaults {
    /// The whole table, in role order.
    pub fn table() -> Vec<RoleDefaults> {
        Role::ALL.into_iter().map(RoleDefaults::from).collect()
    }
}
