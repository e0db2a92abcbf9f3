//! Outreach tracker - integration test support.
//!
//! Re-exports the workspace crates so database-backed tests can reach every
//! layer through one dependency.

pub use outreach_app;
pub use outreach_core;
pub use outreach_db;
pub use outreach_service;
