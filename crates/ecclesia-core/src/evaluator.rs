//! Pure decision functions over a user's granted permission strings.
//!
//! Grants arrive from the identity provider as plain strings and are never
//! normalized: a request is satisfied only by an exact member of the list.
//! Strings that are not well-formed permissions are kept as-is and simply
//! never match anything.

use crate::permissions::{
    Action, MEMBERS_CREATE, MEMBERS_DELETE, MEMBERS_EDIT, Module, Permission,
};

/// True iff `requested` is an exact member of `granted`.
pub fn has_permission<S: AsRef<str>>(granted: &[S], requested: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == requested)
}

/// True if any of `requested` is granted.
pub fn has_any_permission<S: AsRef<str>>(granted: &[S], requested: &[&str]) -> bool {
    requested.iter().any(|r| has_permission(granted, r))
}

/// True if every one of `requested` is granted. An empty request is satisfied.
pub fn has_all_permissions<S: AsRef<str>>(granted: &[S], requested: &[&str]) -> bool {
    requested.iter().all(|r| has_permission(granted, r))
}

/// Module-level access check.
///
/// With an action this is `has_permission(granted, "<module>.<action>")`.
/// Without one it is true iff some grant starts with `"<module>."`, which is
/// what section visibility uses.
pub fn has_module_access<S: AsRef<str>>(
    granted: &[S],
    module: Module,
    action: Option<Action>,
) -> bool {
    match action {
        Some(action) => granted
            .iter()
            .any(|p| Permission::new(module, action) == *p.as_ref()),
        None => granted.iter().any(|p| module.is_prefix_of(p.as_ref())),
    }
}

/// Modules the grant list gives any capability in, in enumeration order.
pub fn accessible_modules<S: AsRef<str>>(granted: &[S]) -> Vec<Module> {
    Module::ALL
        .into_iter()
        .filter(|m| has_module_access(granted, *m, None))
        .collect()
}

pub fn can_create_members<S: AsRef<str>>(granted: &[S]) -> bool {
    has_permission(granted, MEMBERS_CREATE)
}

pub fn can_edit_members<S: AsRef<str>>(granted: &[S]) -> bool {
    has_permission(granted, MEMBERS_EDIT)
}

pub fn can_delete_members<S: AsRef<str>>(granted: &[S]) -> bool {
    has_permission(granted, MEMBERS_DELETE)
}
