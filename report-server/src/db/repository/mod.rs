//! Repository Module
//!
//! The record store seam. Services talk to [`TransactionStore`]; the
//! SurrealDB implementation lives in [`transaction`].

pub mod transaction;

pub use transaction::TransactionRepository;

use std::time::Duration;

use async_trait::async_trait;
use shared::{CategoryCount, Transaction};
use thiserror::Error;

use crate::db::filter::TransactionFilter;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Store call exceeded {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Encoding(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Durable collection of transaction records.
///
/// Records only ever arrive in bulk through [`replace_all`]; everything else
/// is a read. Implementations carry no application-level locking and rely
/// on the backing store for consistency.
///
/// [`replace_all`]: TransactionStore::replace_all
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Discard every stored record, then insert `records` in order.
    /// Returns the number inserted. Not atomic: a failure can leave the
    /// store emptied or partially filled.
    async fn replace_all(&self, records: Vec<Transaction>) -> RepoResult<u64>;

    /// Number of records matching `filter`
    async fn count(&self, filter: &TransactionFilter) -> RepoResult<u64>;

    /// At most `limit` matching records starting at offset `skip`, in the
    /// store's native (load) order
    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> RepoResult<Vec<Transaction>>;

    /// Sum of `price` over matching records, 0 when nothing matches
    async fn sum_price(&self, filter: &TransactionFilter) -> RepoResult<f64>;

    /// Matching records grouped by `category`
    async fn count_by_category(&self, filter: &TransactionFilter) -> RepoResult<Vec<CategoryCount>>;
}
