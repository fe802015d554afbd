//! 产品处理器

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::collections::HashMap;

use super::binding::{bind_new_product, bind_product, parse_id};
use crate::app::AppState;
use crate::core::error::CoreError;

/// `?id=` 查询参数，原样接收字符串再宽松解析
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    pub fn id(&self) -> Option<i32> {
        parse_id(self.id.as_deref())
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(index))
        .route("/products/details", get(details))
        .route("/products/create", get(create_form).post(create))
        .route("/products/edit", get(edit_form).post(edit))
        .route("/products/delete", get(delete_form).post(delete_confirmed))
}

pub async fn index(State(state): State<AppState>) -> Result<Response, CoreError> {
    Ok(state.products.index().await?.into_response())
}

pub async fn details(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CoreError> {
    Ok(state.products.details(query.id()).await?.into_response())
}

pub async fn create_form(State(state): State<AppState>) -> Response {
    state.products.create_form().into_response()
}

pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, CoreError> {
    let bound = bind_new_product(&fields);
    Ok(state
        .products
        .create(bound.product, bound.validation)
        .await?
        .into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CoreError> {
    Ok(state.products.edit_form(query.id()).await?.into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, CoreError> {
    let bound = bind_product(&fields);
    Ok(state
        .products
        .edit(query.id(), bound.product, bound.validation)
        .await?
        .into_response())
}

pub async fn delete_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CoreError> {
    Ok(state.products.delete_form(query.id()).await?.into_response())
}

pub async fn delete_confirmed(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CoreError> {
    let id = query
        .id()
        .ok_or_else(|| CoreError::BadRequest("A numeric product id is required".to_string()))?;
    Ok(state.products.delete_confirmed(id).await?.into_response())
}
