//! Report Server - 交易报表服务
//!
//! # 架构概述
//!
//! 从远程种子文档整体加载交易记录到嵌入式 SurrealDB，
//! 并按月份提供分页查询和统计报表：
//!
//! - **存储** (`db`): `TransactionStore` trait + SurrealDB 实现
//! - **服务** (`services`): 查询、统计、价格分布、分类分布、合并报表、加载
//! - **HTTP API** (`api`): RESTful 只读接口 + 数据初始化
//!
//! # 模块结构
//!
//! ```text
//! report-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 存储层 (过滤条件 / 仓库)
//! ├── services/      # 报表服务
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并初始化日志
///
/// 返回加载后的配置
pub fn setup_environment() -> Config {
    // .env 文件可选
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____                        __
   / __ \___  ____  ____  _____/ /_
  / /_/ / _ \/ __ \/ __ \/ ___/ __/
 / _, _/  __/ /_/ / /_/ / /  / /_
/_/ |_|\___/ .___/\____/_/   \__/
          /_/
    "#
    );
}
