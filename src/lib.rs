//! # Ecclesia Access API
//!
//! Authorization model of a church-management application, served over HTTP
//! so the back end enforces the same decisions the UI gates on.
//!
//! ## Overview
//!
//! - **Permissions**: `"<module>.<action>"` strings, granted per user
//! - **Roles**: Administrador, Pastor, Líder, Tesoureiro, Voluntário, Membro,
//!   each with a default grant list
//! - **Role capabilities**: rights decided by the role alone (editing
//!   financial records, managing users)
//! - **Guards**: a single-criterion check by permission, module or role
//!
//! Users, sessions and persistence belong to the external identity provider.
//! This service only reads the `role` and `permissions` claims of its tokens.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer extractor, permission extractors, capability layers
//! ├── modules/
//! │   └── access/      # Profile, guard check, default table, assignment tooling
//! ├── docs.rs          # OpenAPI document
//! ├── router.rs        # Main application router
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Validated JSON extractor
//! crates/
//! ├── ecclesia-core/          # Permission vocabulary, evaluator, AppError
//! ├── ecclesia-config/        # Env-driven configuration
//! ├── ecclesia-auth/          # Claims and JWT handling
//! ├── ecclesia-models/        # Roles, guards, validation, role change
//! ├── ecclesia-observability/ # Logging and Prometheus metrics
//! └── ecclesia-cli/           # Command-line inspection tool
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use ecclesia_auth;
pub use ecclesia_config;
pub use ecclesia_core;
pub use ecclesia_models;
