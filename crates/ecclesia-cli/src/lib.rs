//! # Ecclesia CLI
//!
//! Offline inspection of the access model for administrators and developers.
//!
//! This library crate holds the command logic used by the CLI binary so it can
//! be tested without a terminal.
//!
//! ## Usage
//!
//! ```ignore
//! use ecclesia_cli::commands;
//!
//! let report = commands::validate("Tesoureiro", &["financial.view".to_string()])?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod commands;
