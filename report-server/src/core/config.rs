use std::time::Duration;

/// Default seed document (the original product transaction dump)
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// `DATABASE_PATH` value that selects the in-memory engine
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件会先被加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | DATABASE_PATH | data/transactions.db | RocksDB 目录, `memory` 为内存库 |
/// | SEED_URL | S3 product_transaction.json | 种子数据地址 |
/// | SEED_FETCH_TIMEOUT_MS | 30000 | 拉取种子数据超时(毫秒) |
/// | STORE_TIMEOUT_MS | 10000 | 单次存储操作超时(毫秒) |
/// | DEFAULT_PAGE_SIZE | 10 | 默认每页条数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录, 设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=8080 cargo run -p report-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库路径
    pub database_path: String,
    /// 种子数据地址
    pub seed_url: String,
    pub seed_fetch_timeout_ms: u64,
    pub store_timeout_ms: u64,
    /// 未指定 perPage 时的每页条数
    pub default_page_size: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 3001),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/transactions.db".into()),
            seed_url: std::env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.into()),
            seed_fetch_timeout_ms: env_parse("SEED_FETCH_TIMEOUT_MS", 30000),
            store_timeout_ms: env_parse("STORE_TIMEOUT_MS", 10000),
            default_page_size: env_parse::<u32>("DEFAULT_PAGE_SIZE", 10).max(1),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, seed_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.seed_url = seed_url.into();
        config
    }

    pub fn seed_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.seed_fetch_timeout_ms)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// 是否使用内存数据库
    pub fn is_in_memory(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
