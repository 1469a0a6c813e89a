use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::{self, TransactionRepository, TransactionStore};
use crate::services::SeedLoader;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 启动时构造一次，之后每个请求浅拷贝 (Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn TransactionStore> | 交易记录存储 |
/// | seed_loader | SeedLoader | 种子数据加载器 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 交易记录存储
    pub store: Arc<dyn TransactionStore>,
    /// 种子数据加载器
    pub seed_loader: SeedLoader,
}

impl ServerState {
    /// 打开数据库并构造所有服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = db::connect(config).await?;
        let repository = TransactionRepository::new(db, config.store_timeout());
        Self::with_store(config.clone(), Arc::new(repository))
    }

    /// 使用已有存储构造状态 (测试用)
    pub fn with_store(config: Config, store: Arc<dyn TransactionStore>) -> Result<Self> {
        let seed_loader = SeedLoader::new(config.seed_url.clone(), config.seed_fetch_timeout())?;
        Ok(Self {
            config,
            store,
            seed_loader,
        })
    }

    pub fn store(&self) -> &dyn TransactionStore {
        self.store.as_ref()
    }
}
