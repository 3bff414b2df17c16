use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::create_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::models::ListProductsQuery;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

/// Query string for product listings: `?page=1&limit=10&sort=desc`
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    page: Option<u32>,
    limit: Option<u32>,
    sort: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let query = ListProductsQuery::new(params.page, params.limit, params.sort.as_deref());

    state
        .product_service
        .list_products(query)
        .await
        .map_err(ApiError::from)
        .map(|products| {
            ApiSuccess::new(
                StatusCode::OK,
                products.iter().map(ProductData::from).collect(),
            )
        })
}
