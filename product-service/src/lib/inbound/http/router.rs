use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::create_user::create_user;
use super::handlers::delete_product::delete_product;
use super::handlers::generate_token::generate_token;
use super::handlers::get_product::get_product;
use super::handlers::get_user_by_email::get_user_by_email;
use super::handlers::list_products::list_products;
use super::handlers::update_product::update_product;
use super::middleware::authenticate as auth_middleware;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    product_service: Arc<dyn ProductServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        product_service,
        authenticator,
    };

    let require_auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    // Registration and lookup share a path; only the lookup needs a token.
    let user_routes = Router::new()
        .route(
            "/users",
            post(create_user).merge(get(get_user_by_email).route_layer(require_auth.clone())),
        )
        .route("/users/generate_token", post(generate_token));

    let product_routes = Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route_layer(require_auth);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(user_routes)
        .merge(product_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
