//! Middleware modules for request processing.
//!
//! - [`auth`]: bearer token extractor and permission-based extractors
//! - [`role`]: role capability layers and guard helpers
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` extractor validates the JWT and builds a `UserSnapshot`
//! 3. Permission extractors or capability layers decide access
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireUsersView};
//!
//! async fn list_roles(RequireUsersView(auth_user): RequireUsersView) -> impl IntoResponse {
//!     // Only executes if the user holds "users.view"
//! }
//! ```

pub mod auth;
pub mod role;
