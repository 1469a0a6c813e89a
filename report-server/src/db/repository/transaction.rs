//! Transaction Repository (SurrealDB)
//!
//! Table layout (`sale_transaction`, schemaless):
//!
//! | field | 说明 |
//! |-------|------|
//! | id | record key = 1-based position in the loaded payload |
//! | source_id | external `id` from the seed document |
//! | date_of_sale | RFC 3339 string (UTC) |
//! | sale_month | 1-12, UTC month of `date_of_sale`; NULL when absent |
//!
//! Keying by load position makes a plain table scan return records in load
//! order, which is the "native order" paging relies on.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::serde_helpers::parse_sale_date;
use shared::{CategoryCount, Transaction};
use surrealdb::engine::local::Db;
use surrealdb::{Response, Surreal};

use super::{RepoError, RepoResult, TransactionStore};
use crate::db::TRANSACTION_TABLE;
use crate::db::filter::{TransactionFilter, WhereClause};

const COLUMNS: &str = "source_id, title, price, description, category, sold, date_of_sale, image";

/// Row as written by the loader
#[derive(Debug, Serialize)]
struct StoredTransaction {
    id: u64,
    source_id: i64,
    title: String,
    price: f64,
    description: String,
    category: String,
    sold: bool,
    date_of_sale: Option<String>,
    sale_month: Option<u8>,
    image: String,
}

impl StoredTransaction {
    fn new(position: u64, tx: Transaction) -> Self {
        let sale_month = tx.sale_month();
        Self {
            id: position,
            source_id: tx.id,
            title: tx.title,
            price: tx.price,
            description: tx.description,
            category: tx.category,
            sold: tx.sold,
            date_of_sale: tx
                .date_of_sale
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            sale_month,
            image: tx.image,
        }
    }
}

/// Row as selected by [`COLUMNS`]
#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(default)]
    source_id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    sold: bool,
    #[serde(default)]
    date_of_sale: Option<String>,
    #[serde(default)]
    image: String,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: row.source_id,
            title: row.title,
            price: row.price,
            description: row.description,
            category: row.category,
            sold: row.sold,
            date_of_sale: row.date_of_sale.as_deref().and_then(parse_sale_date),
            image: row.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Total<T> {
    total: T,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    category: Option<String>,
    total: u64,
}

#[derive(Clone)]
pub struct TransactionRepository {
    db: Surreal<Db>,
    /// Upper bound for every single store call
    timeout: Duration,
}

impl TransactionRepository {
    pub fn new(db: Surreal<Db>, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Run one statement with bound parameters under the store deadline
    async fn run(&self, sql: String, binds: Vec<(&'static str, Value)>) -> RepoResult<Response> {
        let mut query = self.db.query(sql);
        for bind in binds {
            query = query.bind(bind);
        }

        let response = tokio::time::timeout(self.timeout, query.into_future())
            .await
            .map_err(|_| RepoError::Timeout(self.timeout))??;
        Ok(response.check()?)
    }

    /// Run an aggregate `SELECT ... AS total ... GROUP ALL`; no rows means nothing matched
    async fn total<T>(&self, expr: &str, filter: &TransactionFilter) -> RepoResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let WhereClause { sql, binds } = filter.to_surql();
        let mut response = self
            .run(
                format!("SELECT {expr} AS total FROM {TRANSACTION_TABLE}{sql} GROUP ALL"),
                binds,
            )
            .await?;
        let rows: Vec<Total<T>> = response.take(0)?;
        Ok(rows.into_iter().next().map(|row| row.total))
    }
}

#[async_trait]
impl TransactionStore for TransactionRepository {
    async fn replace_all(&self, records: Vec<Transaction>) -> RepoResult<u64> {
        self.run(format!("DELETE {TRANSACTION_TABLE}"), Vec::new())
            .await?;
        tracing::debug!("Cleared {}", TRANSACTION_TABLE);

        if records.is_empty() {
            return Ok(0);
        }

        let rows: Vec<StoredTransaction> = records
            .into_iter()
            .zip(1u64..)
            .map(|(tx, position)| StoredTransaction::new(position, tx))
            .collect();
        let inserted = rows.len() as u64;

        self.run(
            format!("INSERT INTO {TRANSACTION_TABLE} $rows"),
            vec![("rows", serde_json::to_value(rows)?)],
        )
        .await?;

        Ok(inserted)
    }

    async fn count(&self, filter: &TransactionFilter) -> RepoResult<u64> {
        if filter.matches_nothing() {
            return Ok(0);
        }
        Ok(self.total::<u64>("count()", filter).await?.unwrap_or(0))
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> RepoResult<Vec<Transaction>> {
        if filter.matches_nothing() || limit == 0 {
            return Ok(Vec::new());
        }

        let WhereClause { sql, mut binds } = filter.to_surql();
        binds.push(("limit", Value::from(limit)));
        binds.push(("start", Value::from(skip)));

        let mut response = self
            .run(
                format!("SELECT {COLUMNS} FROM {TRANSACTION_TABLE}{sql} LIMIT $limit START $start"),
                binds,
            )
            .await?;
        let rows: Vec<TransactionRow> = response.take(0)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn sum_price(&self, filter: &TransactionFilter) -> RepoResult<f64> {
        if filter.matches_nothing() {
            return Ok(0.0);
        }
        Ok(self
            .total::<f64>("math::sum(price)", filter)
            .await?
            .unwrap_or(0.0))
    }

    async fn count_by_category(&self, filter: &TransactionFilter) -> RepoResult<Vec<CategoryCount>> {
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let WhereClause { sql, binds } = filter.to_surql();
        let mut response = self
            .run(
                format!(
                    "SELECT category, count() AS total FROM {TRANSACTION_TABLE}{sql} GROUP BY category"
                ),
                binds,
            )
            .await?;
        let rows: Vec<CategoryRow> = response.take(0)?;

        let mut counts: Vec<CategoryCount> = rows
            .into_iter()
            .map(|row| CategoryCount {
                category: row.category.unwrap_or_default(),
                count: row.total,
            })
            .collect();
        counts.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(counts)
    }
}
