//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{DeleteProductResponse, Product, ProductId, ProductPayload};
use crate::app::AppState;
use crate::core::error::CoreError;

/// 路径中的 id 不是非负整数时按不存在处理
fn parse_id(raw: &str) -> Result<ProductId, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::NotFound("Product not found".to_string()))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products()?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(payload) = payload?;
    let product = state.product_service.create_product(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let id = parse_id(&id)?;
    let product = state.product_service.get_product(id)?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = parse_id(&id)?;
    let payload = payload.map(|Json(p)| p).map_err(CoreError::from);
    let product = state.product_service.update_product(id, payload)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>, CoreError> {
    let id = parse_id(&id)?;
    let product = state.product_service.delete_product(id)?;
    Ok(Json(DeleteProductResponse::new(product)))
}
