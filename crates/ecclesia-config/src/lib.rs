//! # Ecclesia Config
//!
//! Configuration types for the Ecclesia access service.
//!
//! Every structure is loaded from environment variables and falls back to a
//! development default when a variable is unset or cannot be parsed:
//!
//! - [`jwt`]: verification of tokens issued by the identity provider
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use ecclesia_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
