//! Access endpoints: the caller's profile, guard checks, the default table
//! and assignment tooling for user managers.

pub mod controller;
pub mod router;
pub mod service;
