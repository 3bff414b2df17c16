use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = CreateUserCommand::new(body.name, body.email, body.password)
        .map_err(UserError::from)?;

    state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Public view of a user. The stored credential is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
