use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::product::errors::ProductError;
use crate::user::errors::UserError;

pub mod create_product;
pub mod create_user;
pub mod delete_product;
pub mod generate_token;
pub mod get_product;
pub mod get_user_by_email;
pub mod list_products;
pub mod update_product;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// Generic rejection for any credential or token failure.
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("Unauthorized".to_string())
    }

    fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Request failed");
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByEmail(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::PasswordHashing(_)
            | UserError::TokenIssuance(_)
            | UserError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::InvalidProductId(_) => ApiError::BadRequest(err.to_string()),
            ProductError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            ProductError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
