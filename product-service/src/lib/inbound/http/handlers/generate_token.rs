use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn generate_token(
    State(state): State<AppState>,
    Json(body): Json<GenerateTokenRequest>,
) -> Result<ApiSuccess<GenerateTokenResponseData>, ApiError> {
    // An empty password can never match, so it is rejected like a wrong one
    let password =
        Password::new(body.password).map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    let token = state
        .user_service
        .login(&body.email, &password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GenerateTokenResponseData {
            access_token: token.0,
        },
    ))
}

#[derive(Deserialize)]
pub struct GenerateTokenRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateTokenResponseData {
    pub access_token: String,
}
