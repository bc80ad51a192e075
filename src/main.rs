use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use user_api::{
    create_routes,
    infrastructure::{logger::Logger, store},
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件
    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging.level);
    info!("启动用户服务...");

    let store = store::connect(&config.database).await.map_err(|e| {
        error!("Failed to initialize store: {}", e);
        e
    })?;
    info!("存储后端: {:?}", config.database.backend);

    let app = create_routes(AppState::new(store));

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("🚀 server running at http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /api/user      - 获取所有用户");
    info!("   POST   /api/user      - 创建用户");
    info!("   GET    /api/user/:id  - 获取特定用户");
    info!("   PUT    /api/user/:id  - 更新用户");
    info!("   DELETE /api/user/:id  - 删除用户");

    axum::serve(listener, app).await?;

    Ok(())
}
