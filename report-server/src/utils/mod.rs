//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 应用 Result 别名
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
