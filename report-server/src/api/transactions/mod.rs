//! Transactions API 模块 (分页查询)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/transactions", get(handler::list_transactions))
}
