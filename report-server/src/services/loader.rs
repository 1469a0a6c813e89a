//! 种子数据加载
//!
//! Fetches the seed document (a JSON array of transactions) and replaces the
//! whole store with it. Destructive and not transactional: if the insert
//! fails after the delete, the store stays empty until the next load.

use std::time::Duration;

use shared::Transaction;

use crate::db::TransactionStore;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct SeedLoader {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SeedLoader {
    /// `timeout` bounds the whole fetch, connect through body
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and decode the seed document
    pub async fn fetch(&self) -> AppResult<Vec<Transaction>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;

        if !resp.status().is_success() {
            return Err(AppError::upstream(format!(
                "{} returned {}",
                self.url,
                resp.status()
            )));
        }

        resp.json::<Vec<Transaction>>()
            .await
            .map_err(|e| self.fetch_error(e))
    }

    /// Replace the store contents with the seed document.
    /// Returns the number of records loaded.
    pub async fn load(&self, store: &dyn TransactionStore) -> AppResult<u64> {
        tracing::info!(url = %self.url, "Loading seed data");
        let records = self.fetch().await?;
        let fetched = records.len();

        let inserted = store.replace_all(records).await?;
        tracing::info!(fetched, inserted, "Seed data loaded");
        Ok(inserted)
    }

    fn fetch_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.timeout)
        } else if err.is_decode() {
            AppError::upstream(format!("Malformed seed document: {err}"))
        } else {
            AppError::upstream(err.to_string())
        }
    }
}
