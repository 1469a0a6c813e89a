//! Shared types for the transaction report service
//!
//! Wire types used by the report server and any dashboard client:
//! transaction records, report payloads, month resolution and the
//! error body returned by every failing endpoint.

pub mod models;
pub mod month;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CategoryCount, CombinedReport, PriceBucketCount, SaleStatistics, Transaction,
    TransactionPage,
};
pub use month::{Month, UnknownMonth};
pub use response::ErrorBody;
