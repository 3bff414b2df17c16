use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;

    state
        .product_service
        .get_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
