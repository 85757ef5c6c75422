use product_inventory::{
    app::{router, AppState},
    infrastructure::{config::load_config, logger::Logger},
    ProductService, ProductStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    let _log_guard = Logger::init(&config.logging)?;

    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let store = if config.store.seed_sample_data {
        ProductStore::with_sample_data()
    } else {
        ProductStore::new()
    };
    info!("✅ 已初始化 {} 个示例产品", store.len());

    let state = AppState::new(ProductService::new(store));
    let app = router(state, &config.http);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 产品库存服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /               - 产品管理页面");
    info!("   GET    /products       - 获取所有产品");
    info!("   POST   /products       - 创建新产品");
    info!("   GET    /products/:id   - 获取特定产品");
    info!("   PUT    /products/:id   - 更新产品");
    info!("   DELETE /products/:id   - 删除产品");
    info!("   GET    /health         - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("监听退出信号失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
