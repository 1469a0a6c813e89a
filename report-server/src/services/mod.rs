//! 报表服务
//!
//! Each service is a plain async function over a `&dyn TransactionStore`,
//! so handlers, the aggregator and tests all call the same code.
//!
//! - [`query`] - 按月份/关键字分页查询
//! - [`statistics`] - 月度销售统计
//! - [`distribution`] - 价格区间分布 / 分类分布
//! - [`aggregator`] - 合并统计 + 两个分布
//! - [`loader`] - 从种子数据源整体重建存储

pub mod aggregator;
pub mod distribution;
pub mod loader;
pub mod query;
pub mod statistics;

pub use aggregator::combined_report;
pub use distribution::{PRICE_BUCKETS, PriceBucket, category_breakdown, price_histogram};
pub use loader::SeedLoader;
pub use query::{TransactionQuery, list_transactions, resolve_month};
pub use statistics::sale_statistics;
