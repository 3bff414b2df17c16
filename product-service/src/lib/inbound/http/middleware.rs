use auth::AuthenticationError;
use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Every failure collapses into the same 401 body; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_user = extract_bearer_token(req.headers())
        .and_then(|token| require_auth(&state.authenticator, token))
        .map_err(|e| {
            tracing::warn!(reason = ?e, "Rejected unauthenticated request");
            ApiError::unauthorized().into_response()
        })?;

    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

/// Validates a raw token and resolves the user it was issued for.
pub fn require_auth(
    authenticator: &Authenticator,
    token: Option<&str>,
) -> Result<AuthenticatedUser, AuthenticationError> {
    let claims = authenticator.validate_token(token)?;

    let user_id = UserId::from_string(claims.subject())
        .map_err(|e| AuthenticationError::Malformed(e.to_string()))?;

    Ok(AuthenticatedUser { user_id })
}

/// Reads `Authorization: Bearer <token>`. An absent header yields `None`.
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthenticationError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthenticationError::Malformed("non-ascii authorization header".into()))?;

    // The scheme is case-insensitive (RFC 7235)
    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(Some(token)),
        _ => Err(AuthenticationError::Malformed("expected bearer scheme".into())),
    }
}
