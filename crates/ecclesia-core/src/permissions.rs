//! Permission vocabulary for the Ecclesia access model.
//!
//! A permission is the pair of a functional area ([`Module`]) and an operation
//! kind ([`Action`]), written canonically as `"<module>.<action>"`. Users carry
//! their grants as plain strings; the typed [`Permission`] is used wherever
//! the set of grantable capabilities is enumerated (default tables, the
//! catalogue, validation).
//!
//! # Example
//!
//! ```ignore
//! use ecclesia_core::permissions::{Action, Module, Permission};
//!
//! let p: Permission = "financial.reports".parse()?;
//! assert_eq!(p.module(), Module::Financial);
//! assert_eq!(p.action(), Action::Reports);
//! assert_eq!(p.to_string(), "financial.reports");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::openapi::{RefOr, schema::Schema};
use utoipa::{PartialSchema, ToSchema};

/// Separator between the module and action components.
pub const SEPARATOR: char = '.';

/// Error type for vocabulary parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The module name is not part of the enumeration.
    UnknownModule(String),
    /// The action name is not part of the enumeration.
    UnknownAction(String),
    /// The role name is not part of the enumeration.
    UnknownRole(String),
    /// The string is not of the form `module.action`.
    MalformedPermission(String),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModule(s) => write!(f, "Unknown module: {}", s),
            Self::UnknownAction(s) => write!(f, "Unknown action: {}", s),
            Self::UnknownRole(s) => write!(f, "Unknown role: {}", s),
            Self::MalformedPermission(s) => {
                write!(f, "Malformed permission '{}', expected module.action", s)
            }
        }
    }
}

// ============================================================================
// Module
// ============================================================================

/// Functional area of the application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Dashboard,
    Members,
    Departments,
    Events,
    Financial,
    Users,
    Notifications,
    Settings,
}

impl Module {
    /// Every module, in declaration order.
    pub const ALL: [Module; 8] = [
        Module::Dashboard,
        Module::Members,
        Module::Departments,
        Module::Events,
        Module::Financial,
        Module::Users,
        Module::Notifications,
        Module::Settings,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Members => "members",
            Module::Departments => "departments",
            Module::Events => "events",
            Module::Financial => "financial",
            Module::Users => "users",
            Module::Notifications => "notifications",
            Module::Settings => "settings",
        }
    }

    /// True if `permission` starts with `"<module>."`.
    pub fn is_prefix_of(&self, permission: &str) -> bool {
        permission
            .strip_prefix(self.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseError::UnknownModule(s.to_string()))
    }
}

// ============================================================================
// Action
// ============================================================================

/// Operation kind within a module.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Reports,
    /// Manage the permissions of other users.
    Permissions,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 7] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::Reports,
        Action::Permissions,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Reports => "reports",
            Action::Permissions => "permissions",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

// ============================================================================
// Permission
// ============================================================================

/// A single grantable capability: `"<module>.<action>"`.
///
/// Any combination of [`Module`] and [`Action`] is well formed, so the full
/// permission space is the cross product of both enumerations.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    module: Module,
    action: Action,
}

impl Permission {
    #[inline]
    pub const fn new(module: Module, action: Action) -> Self {
        Self { module, action }
    }

    #[inline]
    pub const fn module(&self) -> Module {
        self.module
    }

    #[inline]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Iterate over the full module × action permission space.
    pub fn all() -> impl Iterator<Item = Permission> {
        Module::ALL.into_iter().flat_map(|module| {
            Action::ALL
                .into_iter()
                .map(move |action| Permission::new(module, action))
        })
    }

    /// True if `permission` parses into a well-formed permission.
    pub fn is_well_formed(permission: &str) -> bool {
        permission.parse::<Permission>().is_ok()
    }
}

// Documented as its string form, matching the serde representation.
impl PartialSchema for Permission {
    fn schema() -> RefOr<Schema> {
        <String as PartialSchema>::schema()
    }
}

impl ToSchema for Permission {}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permission({})", self)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, SEPARATOR, self.action)
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, action) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| ParseError::MalformedPermission(s.to_string()))?;

        Ok(Self::new(module.parse()?, action.parse()?))
    }
}

impl TryFrom<String> for Permission {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.to_string()
    }
}

impl PartialEq<str> for Permission {
    fn eq(&self, other: &str) -> bool {
        other
            .split_once(SEPARATOR)
            .is_some_and(|(m, a)| m == self.module.as_str() && a == self.action.as_str())
    }
}

// =============================================================================
// Members permissions
// =============================================================================

/// Permission to view member records
pub const MEMBERS_VIEW: &str = "members.view";
/// Permission to create member records
pub const MEMBERS_CREATE: &str = "members.create";
/// Permission to edit member records
pub const MEMBERS_EDIT: &str = "members.edit";
/// Permission to delete member records
pub const MEMBERS_DELETE: &str = "members.delete";

// =============================================================================
// Financial permissions
// =============================================================================

/// Permission to view financial records
pub const FINANCIAL_VIEW: &str = "financial.view";
/// Permission to edit financial records
pub const FINANCIAL_EDIT: &str = "financial.edit";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to view user accounts
pub const USERS_VIEW: &str = "users.view";
/// Permission to manage other users' permissions
pub const USERS_PERMISSIONS: &str = "users.permissions";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permission() {
        let p: Permission = "members.create".parse().unwrap();
        assert_eq!(p.module(), Module::Members);
        assert_eq!(p.action(), Action::Create);
    }

    #[test]
    fn test_permission_display() {
        let p = Permission::new(Module::Users, Action::Permissions);
        assert_eq!(p.to_string(), "users.permissions");
        assert_eq!(format!("{:?}", p), "Permission(users.permissions)");
    }

    #[test]
    fn test_parse_rejects_unknown_components() {
        assert_eq!(
            "choir.view".parse::<Permission>(),
            Err(ParseError::UnknownModule("choir".to_string()))
        );
        assert_eq!(
            "members.viewall".parse::<Permission>(),
            Err(ParseError::UnknownAction("viewall".to_string()))
        );
        assert_eq!(
            "members".parse::<Permission>(),
            Err(ParseError::MalformedPermission("members".to_string()))
        );
        assert!("members.view.extra".parse::<Permission>().is_err());
        assert!("Members.View".parse::<Permission>().is_err());
    }

    #[test]
    fn test_full_permission_space() {
        let all: Vec<Permission> = Permission::all().collect();
        assert_eq!(all.len(), Module::ALL.len() * Action::ALL.len());
        assert!(all.contains(&Permission::new(Module::Settings, Action::Edit)));
    }

    #[test]
    fn test_constants_are_well_formed() {
        for constant in [
            MEMBERS_VIEW,
            MEMBERS_CREATE,
            MEMBERS_EDIT,
            MEMBERS_DELETE,
            FINANCIAL_VIEW,
            FINANCIAL_EDIT,
            USERS_VIEW,
            USERS_PERMISSIONS,
        ] {
            assert!(Permission::is_well_formed(constant), "{}", constant);
        }
    }

    #[test]
    fn test_module_prefix() {
        assert!(Module::Members.is_prefix_of("members.view"));
        assert!(Module::Members.is_prefix_of("members."));
        assert!(!Module::Members.is_prefix_of("membersx.view"));
        assert!(!Module::Members.is_prefix_of("members"));
        assert!(!Module::Users.is_prefix_of("members.view"));
    }

    #[test]
    fn test_permission_eq_str() {
        let p = Permission::new(Module::Financial, Action::View);
        assert!(p == *"financial.view");
        assert!(p != *"financial.viewall");
        assert!(p != *"financial");
    }

    #[test]
    fn test_permission_serde() {
        let p = Permission::new(Module::Events, Action::Delete);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#""events.delete""#);

        let err = serde_json::from_str::<Permission>(r#""events.burn""#);
        assert!(err.is_err());
    }

    #[test]
    fn test_module_serde_lowercase() {
        let json = serde_json::to_string(&Module::Notifications).unwrap();
        assert_eq!(json, r#""notifications""#);
        let module: Module = serde_json::from_str(r#""financial""#).unwrap();
        assert_eq!(module, Module::Financial);
    }

    #[test]
    fn test_permission_schema_is_string() {
        let schema = serde_json::to_value(Permission::schema()).unwrap();
        assert_eq!(schema["type"], "string");
        assert_eq!(Permission::name(), "Permission");
    }
}
