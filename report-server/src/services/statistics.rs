//! Monthly sale statistics

use shared::{Month, SaleStatistics};

use crate::db::{TransactionFilter, TransactionStore};
use crate::utils::AppResult;

/// Total sale amount plus sold / not-sold counts for `month`.
///
/// `total_sale` covers every record of the month, sold or not. The three
/// figures are independent store calls run concurrently.
pub async fn sale_statistics(
    store: &dyn TransactionStore,
    month: Option<Month>,
) -> AppResult<SaleStatistics> {
    let base = TransactionFilter::for_month(month);
    let sold = base.clone().with_sold(true);
    let not_sold = base.clone().with_sold(false);

    let (total_sale, sold_items, not_sold_items) = tokio::try_join!(
        store.sum_price(&base),
        store.count(&sold),
        store.count(&not_sold),
    )?;

    Ok(SaleStatistics {
        total_sale,
        sold_items,
        not_sold_items,
    })
}
