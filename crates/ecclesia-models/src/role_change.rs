//! Role change handling.
//!
//! Assigning a new role replaces the user's grant list with the new role's
//! defaults. Custom grants are not merged in. The grants that the overwrite
//! drops are returned in [`RoleChange::discarded`] so an editing screen can
//! ask for confirmation before saving.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use validator::Validate;

use crate::roles::{Role, default_permissions_for, default_permissions_for_name};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleChange {
    /// Role name as stored
    pub role: String,
    /// The new grant list: exactly the role's defaults.
    pub permissions: Vec<String>,
    /// Previous grants that are not part of the new defaults.
    pub discarded: Vec<String>,
}

/// Replace `previous` with the defaults of `new_role`.
pub fn apply_role_change<S: AsRef<str>>(previous: &[S], new_role: Role) -> RoleChange {
    overwrite(previous, new_role.as_str(), default_permissions_for(new_role))
}

/// [`apply_role_change`] for a role given by its stored name.
///
/// An unrecognized name has no defaults: the new grant list is empty and every
/// previous grant is discarded.
pub fn apply_role_change_for_name<S: AsRef<str>>(previous: &[S], new_role: &str) -> RoleChange {
    overwrite(previous, new_role, default_permissions_for_name(new_role))
}

fn overwrite<S: AsRef<str>>(previous: &[S], role: &str, permissions: Vec<String>) -> RoleChange {
    let mut seen = HashSet::new();
    let discarded: Vec<String> = previous
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !permissions.iter().any(|d| d.as_str() == *p))
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect();

    RoleChange {
        role: role.to_string(),
        permissions,
        discarded,
    }
}

// DTOs

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleChangeDto {
    /// Role name as stored; unrecognized names get no defaults
    #[validate(length(max = 64, message = "Role must not exceed 64 characters"))]
    pub role: String,
    #[validate(length(max = 256, message = "At most 256 permissions may be submitted"))]
    #[serde(default)]
    pub current_permissions: Vec<String>,
}
