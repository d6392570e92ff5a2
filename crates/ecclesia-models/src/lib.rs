//! # Ecclesia Models
//!
//! The role side of the access model and the data structures exchanged with
//! callers.
//!
//! # Modules
//!
//! - [`roles`]: the closed role set, the default-permission table and
//!   role-intrinsic capabilities
//! - [`validation`]: advisory checks of a grant list against a role
//! - [`role_change`]: replacing a grant list when a user's role changes
//! - [`guard`]: the single decision point used by protected regions
//! - [`users`]: the user snapshot built from verified token claims
//!
//! # Example
//!
//! ```ignore
//! use ecclesia_models::{GuardRequest, Role, UserSnapshot, validate_assignment};
//!
//! let report = validate_assignment(Role::Treasurer, &["financial.view"]);
//! if !report.is_valid {
//!     println!("{:?}", report.errors);
//! }
//!
//! if user.can(&GuardRequest::treasurer_only()) {
//!     // render the treasury screen
//! }
//! ```

pub mod guard;
pub mod role_change;
pub mod roles;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use guard::{GuardCriterion, GuardDecision, GuardRequest, evaluate_guard};
pub use role_change::{
    RoleChange, RoleChangeDto, apply_role_change, apply_role_change_for_name,
};
pub use roles::{
    Role, RoleCapability, RoleDefaults, can_edit_financial, can_manage_users,
    default_permissions_for, default_permissions_for_name,
};
pub use users::{AccessProfile, UserSnapshot};
pub use validation::{
    ValidateAssignmentDto, ValidationResult, validate_assignment, validate_assignment_for_name,
};
