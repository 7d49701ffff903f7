use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::error;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        .route(
            "/api/translate",
            post(handlers::translate).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        // Front-end page and script
        .fallback_service(ServeDir::new(system_config.static_path()))
}

/// Permissive CORS: any origin, `POST`/`OPTIONS`, `Content-Type`
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);
    ApiError::Internal.into_response()
}

/// Full application with middleware, ready to serve
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.system_config.body_limit_bytes;

    Router::new()
        .merge(create_routes(&state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
