//! 产品管理：模型、内存存储、服务与处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use model::{Product, ProductId, ProductPayload};
pub use service::ProductService;
pub use store::{ProductStore, StoreError};
