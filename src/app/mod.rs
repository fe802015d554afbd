//! 应用层：路由与共享状态

pub mod home;
pub mod products;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::HttpConfig;
use products::{ProductRepository, ProductsController};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductsController,
    pub store_backend: &'static str,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>, store_backend: &'static str) -> Self {
        Self {
            products: ProductsController::new(repository),
            store_backend,
        }
    }
}

/// 创建完整路由
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/", get(home::handler::index))
        .route("/health", get(home::handler::health))
        .merge(products::handler::routes())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
