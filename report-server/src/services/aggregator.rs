//! Combined report
//!
//! Statistics, price histogram and category breakdown for one month, computed
//! concurrently in-process. Any failure fails the whole report.

use shared::{CombinedReport, Month};

use super::{category_breakdown, price_histogram, sale_statistics};
use crate::db::TransactionStore;
use crate::utils::AppResult;

pub async fn combined_report(
    store: &dyn TransactionStore,
    month: Option<Month>,
) -> AppResult<CombinedReport> {
    let (statistics, bar_chart, pie_chart) = tokio::try_join!(
        sale_statistics(store, month),
        price_histogram(store, month),
        category_breakdown(store, month),
    )?;

    Ok(CombinedReport {
        statistics,
        bar_chart,
        pie_chart,
    })
}
