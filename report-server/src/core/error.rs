use thiserror::Error;

use crate::db::RepoError;
use crate::utils::AppError;

/// 启动/运行期错误 (请求级错误见 [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] RepoError),

    #[error("服务初始化失败: {0}")]
    Service(#[from] AppError),

    #[error("端口绑定失败: {0}")]
    Bind(std::io::Error),

    #[error("HTTP 服务异常退出: {0}")]
    Serve(std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
