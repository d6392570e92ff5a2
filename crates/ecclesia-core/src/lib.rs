//! # Ecclesia Core
//!
//! Permission vocabulary, the permission-list evaluator and shared error types.
//!
//! - [`permissions`]: `Module`, `Action` and the `"<module>.<action>"` permission type
//! - [`evaluator`]: pure decision functions over a user's granted permission strings
//! - [`errors`]: HTTP-facing application error
//!
//! # Example
//!
//! ```ignore
//! use ecclesia_core::evaluator::{has_module_access, has_permission};
//! use ecclesia_core::permissions::{self, Module};
//!
//! let granted = vec!["members.view".to_string(), "events.create".to_string()];
//!
//! assert!(has_permission(&granted, "members.view"));
//! assert!(!has_permission(&granted, permissions::MEMBERS_DELETE));
//! assert!(has_module_access(&granted, Module::Events, None));
//! ```

pub mod errors;
pub mod evaluator;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use evaluator::{has_module_access, has_permission};
pub use permissions::{Action, Module, ParseError, Permission};
