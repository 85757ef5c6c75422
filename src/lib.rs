//! # 产品库存管理服务
//!
//! 基于 Axum 的产品增删改查服务，数据保存在进程内存中：
//! - `app`：路由、产品存储/服务/处理器、健康检查与管理页面
//! - `core`：错误类型、请求日志中间件、通用响应
//! - `infrastructure`：配置加载与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use app::product::{Product, ProductPayload, ProductService, ProductStore};
pub use infrastructure::config::Config;
