use report_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    if !config.is_production() {
        print_banner();
    }

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Report server starting..."
    );

    // 2. 初始化服务器状态 (打开数据库)
    let state = ServerState::initialize(&config).await?;
    tracing::info!(seed_url = %state.seed_loader.url(), "Store ready");

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
