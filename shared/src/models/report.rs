//! Report payloads
//!
//! Response bodies of the listing and chart endpoints. Field names are the
//! dashboard's camelCase keys.

use serde::{Deserialize, Serialize};

use super::Transaction;

/// One page of a month-scoped transaction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    /// Matches ignoring paging
    pub total: u64,
    /// Requested page (1-based)
    pub page: u32,
    pub total_pages: u32,
}

impl TransactionPage {
    pub fn new(transactions: Vec<Transaction>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            total.div_ceil(page_size as u64) as u32
        } else {
            0
        };

        Self {
            transactions,
            total,
            page,
            total_pages,
        }
    }
}

/// Sale totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleStatistics {
    /// Sum of `price` over every record of the month, sold or not
    pub total_sale: f64,
    pub sold_items: u64,
    pub not_sold_items: u64,
}

/// Bar chart entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucketCount {
    /// Bucket label, e.g. `"101-200"` or `"901-above"`
    pub range: String,
    pub count: u64,
}

/// Pie chart entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Statistics, bar chart and pie chart for one month in a single body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub statistics: SaleStatistics,
    pub bar_chart: Vec<PriceBucketCount>,
    pub pie_chart: Vec<CategoryCount>,
}
