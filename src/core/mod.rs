//! 核心层：错误、中间件与通用响应

pub mod error;
pub mod middleware;
pub mod response;
