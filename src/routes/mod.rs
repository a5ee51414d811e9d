// src/routes/mod.rs
pub mod chat;

use crate::message::StatusResponse;
use crate::state::SharedState;
use axum::{
    Json, Router,
    http::{
        HeaderValue, Method, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    },
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "Tenant Rights Chatbot API";
const CHAT_METHODS: &str = "POST, OPTIONS";

pub fn create_router() -> Router<SharedState> {
    // The header overrides sit outside the CORS layer so pre-flight answers
    // and chat responses share the same values.
    let chat_routes = Router::new()
        .route(
            "/chat",
            post(chat_handler).options(|| async { StatusCode::OK }),
        )
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CHAT_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        ));

    Router::new()
        .route("/", get(status_handler))
        .layer(cors_layer())
        .merge(chat_routes)
        .layer(TraceLayer::new_for_http())
}

/// Any origin, no credentials. Answers every OPTIONS request itself
/// with an empty 200.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: format!("{SERVICE_NAME} is running"),
    })
}
