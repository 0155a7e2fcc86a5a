//! # Cinema Eats Server
//!
//! The newsletter subscription endpoint. `POST /api/subscribe` forwards an
//! email address to the Brevo contacts API; CORS is open to any origin.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod mailing_list;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use handlers::{method_not_allowed, subscribe_handler};
use infra::app_state::AppState;

pub const SUBSCRIBE_PATH: &str = "/api/subscribe";

pub fn create_app(state: AppState) -> Router {
    // Answers every OPTIONS request itself, before routing.
    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            SUBSCRIBE_PATH,
            post(subscribe_handler).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}
