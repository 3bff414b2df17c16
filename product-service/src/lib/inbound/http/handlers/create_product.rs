use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command =
        CreateProductCommand::new(body.name, body.price).map_err(ProductError::from)?;

    tracing::debug!(user_id = %auth_user.user_id, "Creating product");

    state
        .product_service
        .create_product(command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for creating or replacing a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.as_str().to_string(),
            price: product.price.value(),
            created_at: product.created_at,
        }
    }
}
