//! Seasonal pricing service for campervan rentals.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use pricing::responses::ErrorResponse;
use pricing::{DefaultSchedule, SeasonCatalog, StayLimits};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState<C> {
    pub catalog: C,
    pub schedule: Arc<DefaultSchedule>,
    pub stay_limits: StayLimits,
}

impl<C> AppState<C> {
    pub fn new(catalog: C, schedule: DefaultSchedule, stay_limits: StayLimits) -> Self {
        Self {
            catalog,
            schedule: Arc::new(schedule),
            stay_limits,
        }
    }
}

/// Build the full application router
pub fn app<C>(state: AppState<C>) -> Router
where
    C: SeasonCatalog + Clone + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(pricing::router::<C>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Turn a handler panic into the same 500 body as any other internal error
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    let body = ErrorResponse {
        error: "Error interno".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
