//! 应用层：路由与共享状态

pub mod health;
pub mod product;
pub mod ui;

use axum::{
    error_handling::HandleErrorLayer,
    middleware,
    routing::get,
    BoxError, Router,
};
use std::time::Duration;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use crate::infrastructure::config::HttpConfig;
use product::{handler, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// 构建完整路由
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    let routes = Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health_check))
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    with_request_timeout(routes, Duration::from_secs(http.timeout_seconds)).with_state(state)
}

/// 超时后返回 408 和 `{error}` 响应体
fn with_request_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(timeout),
    )
}

async fn handle_timeout_error(err: BoxError) -> CoreError {
    if err.is::<Elapsed>() {
        CoreError::Timeout
    } else {
        CoreError::InternalServerError(format!("Unhandled internal error: {}", err))
    }
}

async fn not_found() -> CoreError {
    CoreError::NotFound("Not found".to_string())
}
