//! Seed API 模块 (数据初始化)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/initialize-database", get(handler::initialize_database))
}
