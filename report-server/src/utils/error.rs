//! 统一错误处理
//!
//! 提供应用级错误类型：
//! - [`AppError`] - 应用错误枚举
//!
//! # 错误分类
//!
//! | 分类 | 来源 | HTTP |
//! |------|------|------|
//! | Upstream | 种子数据拉取/解析失败 | 500 |
//! | Database | 存储操作失败 | 500 |
//! | Timeout | 存储或拉取超时 | 500 |
//! | Internal | 其他内部错误 | 500 |
//!
//! The dashboard only distinguishes success from failure, so every variant
//! answers 500 with `{"error": "<message>"}`.
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::upstream("seed source returned 503"))
//! ```

use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch seed data: {0}")]
    /// 种子数据源错误
    Upstream(String),

    #[error("Database error: {0}")]
    /// 存储错误
    Database(String),

    #[error("Operation timed out after {}ms", .0.as_millis())]
    /// 超时
    Timeout(Duration),

    #[error("Internal server error: {0}")]
    /// 内部错误
    Internal(String),
}

impl AppError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Timeout(after) => AppError::Timeout(after),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            AppError::Upstream(_) => error!(target: "upstream", error = %message, "Seed fetch failed"),
            AppError::Database(_) | AppError::Timeout(_) => {
                error!(target: "database", error = %message, "Database error occurred")
            }
            AppError::Internal(_) => error!(target: "internal", error = %message, "Internal error occurred"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(message))).into_response()
    }
}
