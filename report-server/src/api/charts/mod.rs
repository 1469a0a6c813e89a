//! Charts API 模块 (价格分布 / 分类分布 / 合并数据)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/bar-chart", get(handler::get_bar_chart))
        .route("/api/pie-chart", get(handler::get_pie_chart))
        .route("/api/combined-data", get(handler::get_combined_data))
}
