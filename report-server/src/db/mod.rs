//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk, or the in-memory engine when
//! `DATABASE_PATH=memory` (and in tests).

pub mod filter;
pub mod repository;

pub use filter::{MonthScope, PriceRange, SearchTerm, TransactionFilter};
pub use repository::{RepoError, RepoResult, TransactionRepository, TransactionStore};

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::Config;

pub const NAMESPACE: &str = "report";
pub const DATABASE: &str = "report";

/// Table holding the loaded transaction records
pub const TRANSACTION_TABLE: &str = "sale_transaction";

/// Open the store described by `config`
pub async fn connect(config: &Config) -> RepoResult<Surreal<Db>> {
    if config.is_in_memory() {
        return connect_memory().await;
    }

    let path = Path::new(&config.database_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            RepoError::Database(format!(
                "Failed to create database directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let db = Surreal::new::<RocksDb>(path).await?;
    prepare(&db).await?;
    tracing::info!("Database opened at {} (SurrealDB RocksDB)", path.display());
    Ok(db)
}

/// Open a fresh in-memory store
pub async fn connect_memory() -> RepoResult<Surreal<Db>> {
    let db = Surreal::new::<Mem>(()).await?;
    prepare(&db).await?;
    tracing::info!("Database opened in memory (SurrealDB Mem)");
    Ok(db)
}

async fn prepare(db: &Surreal<Db>) -> RepoResult<()> {
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    db.query(format!(
        "DEFINE TABLE IF NOT EXISTS {TRANSACTION_TABLE} SCHEMALESS"
    ))
    .await?
    .check()?;
    Ok(())
}
