use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_product::ProductData;
use super::create_product::ProductRequest;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    // Parse at the HTTP boundary - errors automatically converted
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;
    let command = UpdateProductCommand::new(body.name, body.price).map_err(ProductError::from)?;

    state
        .product_service
        .update_product(&product_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
