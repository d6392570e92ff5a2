//! # Ecclesia Auth
//!
//! Claims issued by the external identity provider and JWT utilities.
//!
//! - [`claims`]: the access token claim structure
//! - [`jwt`]: token verification, plus minting for development and tests
//!
//! The provider owns the user lifecycle. This crate only reads the `role` and
//! `permissions` claims it embeds; everything else about authentication
//! (sign-in, OAuth exchange, refresh) happens in the provider's SDK.
//!
//! # Example
//!
//! ```ignore
//! use ecclesia_auth::{create_access_token, verify_token};
//! use ecclesia_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token(
//!     user_id,
//!     "tesouraria@igreja.org",
//!     "Tesoureiro",
//!     vec!["financial.view".to_string()],
//!     &config,
//! )?;
//!
//! let claims = verify_token(&token, &config)?;
//! println!("Role: {}", claims.role);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
