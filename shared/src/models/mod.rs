//! Data models
//!
//! Shared between report-server and the dashboard (via API).

pub mod report;
pub mod serde_helpers;
pub mod transaction;

// Re-exports
pub use report::*;
pub use transaction::*;
