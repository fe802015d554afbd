//! 首页与健康检查处理器

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

/// 服务信息
pub async fn index() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /products": "list all products",
            "GET /products/details?id=": "show one product",
            "GET /products/create": "empty create form",
            "POST /products/create": "create a product (form: name, price, color)",
            "GET /products/edit?id=": "edit form",
            "POST /products/edit?id=": "update a product",
            "GET /products/delete?id=": "delete confirmation",
            "POST /products/delete?id=": "delete a product",
            "GET /health": "health check"
        }
    })))
}

/// 健康检查：对存储做一次往返
pub async fn health(State(state): State<AppState>) -> Result<Json<ApiResponse<Value>>, CoreError> {
    let products = state.products.repository().count().await?;

    Ok(Json(ApiResponse::success(json!({
        "status": "healthy",
        "store": state.store_backend,
        "products": products,
    }))))
}
