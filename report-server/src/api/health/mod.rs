//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 欢迎信息 |
//! | /health | GET | 健康检查 (含记录数) |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::TransactionFilter;
use crate::utils::AppResult;

pub const WELCOME: &str =
    "Welcome to the Transaction API. Use /api/initialize-database to set up the database.";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 当前存储的记录数
    records: u64,
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let records = state.store().count(&TransactionFilter::all()).await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        records,
    }))
}
