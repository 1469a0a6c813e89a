//! Transactions API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::TransactionPage;

use crate::core::ServerState;
use crate::services::{self, TransactionQuery};
use crate::utils::AppResult;

/// Raw query string; paging values are parsed leniently by [`TransactionQuery`]
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

/// GET /api/transactions - Month-scoped listing with search and paging
pub async fn list_transactions(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<TransactionPage>> {
    let query = TransactionQuery::from_params(
        query.month.as_deref(),
        query.search.as_deref(),
        query.page.as_deref(),
        query.per_page.as_deref(),
        state.config.default_page_size,
    );
    let page = services::list_transactions(state.store(), &query).await?;
    Ok(Json(page))
}
