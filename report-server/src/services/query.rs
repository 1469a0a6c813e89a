//! Paged transaction listing

use shared::{Month, TransactionPage};

use crate::db::{TransactionFilter, TransactionStore};
use crate::utils::AppResult;

/// A listing request with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    /// `None` when the requested month could not be resolved
    pub month: Option<Month>,
    pub search: String,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl TransactionQuery {
    /// Build from raw query-string values.
    ///
    /// `page` and `per_page` fall back to 1 and `default_page_size` when
    /// missing, non-numeric or zero.
    pub fn from_params(
        month: Option<&str>,
        search: Option<&str>,
        page: Option<&str>,
        per_page: Option<&str>,
        default_page_size: u32,
    ) -> Self {
        Self {
            month: resolve_month(month),
            search: search.unwrap_or_default().to_string(),
            page: positive_or(page, 1),
            page_size: positive_or(per_page, default_page_size.max(1)),
        }
    }

    /// Records to skip before the requested page
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter::for_month(self.month).with_search(&self.search)
    }
}

/// Resolve the `month` query value; missing or unknown months are logged
/// and yield `None`, which scopes every report to nothing
pub fn resolve_month(raw: Option<&str>) -> Option<Month> {
    let raw = raw.unwrap_or_default();
    let month = Month::resolve(raw);
    if month.is_none() {
        tracing::warn!(month = %raw, "Unresolved month, report will be empty");
    }
    month
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// One page of month-scoped (optionally searched) records plus the total
/// match count
pub async fn list_transactions(
    store: &dyn TransactionStore,
    query: &TransactionQuery,
) -> AppResult<TransactionPage> {
    let filter = query.filter();
    let (transactions, total) = tokio::try_join!(
        store.find(&filter, query.skip(), u64::from(query.page_size)),
        store.count(&filter),
    )?;

    tracing::debug!(
        page = query.page,
        page_size = query.page_size,
        total,
        "Listed transactions"
    );
    Ok(TransactionPage::new(
        transactions,
        total,
        query.page,
        query.page_size,
    ))
}
