use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::create_user::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct GetUserByEmailQuery {
    email: Option<String>,
}

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<GetUserByEmailQuery>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let email = query
        .email
        .map(EmailAddress::new)
        .transpose()
        .ok()
        .flatten()
        .ok_or_else(|| ApiError::BadRequest("email is required".to_string()))?;

    state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
