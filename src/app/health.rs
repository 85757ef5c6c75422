//! 健康检查

use axum::{extract::State, response::Json};

use super::AppState;
use crate::core::{error::CoreError, response::HealthResponse};

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, CoreError> {
    let count = state.product_service.count()?;
    Ok(Json(HealthResponse::healthy(count)))
}
