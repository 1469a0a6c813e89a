//! Statistics API 模块 (月度统计)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/statistics", get(handler::get_statistics))
}
