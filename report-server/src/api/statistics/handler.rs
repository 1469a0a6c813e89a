//! Statistics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::SaleStatistics;

use crate::api::params::MonthQuery;
use crate::core::ServerState;
use crate::services;
use crate::utils::AppResult;

/// GET /api/statistics - Total sale, sold and not-sold counts for a month
pub async fn get_statistics(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<SaleStatistics>> {
    let stats = services::sale_statistics(state.store(), query.resolve()).await?;
    Ok(Json(stats))
}
