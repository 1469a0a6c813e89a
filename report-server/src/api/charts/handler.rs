//! Charts API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::{CategoryCount, CombinedReport, PriceBucketCount};

use crate::api::params::MonthQuery;
use crate::core::ServerState;
use crate::services;
use crate::utils::AppResult;

/// GET /api/bar-chart - Price histogram (ten fixed buckets)
pub async fn get_bar_chart(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<PriceBucketCount>>> {
    let buckets = services::price_histogram(state.store(), query.resolve()).await?;
    Ok(Json(buckets))
}

/// GET /api/pie-chart - Records per category
pub async fn get_pie_chart(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<CategoryCount>>> {
    let categories = services::category_breakdown(state.store(), query.resolve()).await?;
    Ok(Json(categories))
}

/// GET /api/combined-data - Statistics + bar chart + pie chart in one call
pub async fn get_combined_data(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<CombinedReport>> {
    let report = services::combined_report(state.store(), query.resolve()).await?;
    Ok(Json(report))
}
