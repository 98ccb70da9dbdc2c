//! Pricing route handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::catalog::SeasonCatalog;
use super::requests::CalculateQuoteRequest;
use super::responses::QuoteResponse;
use super::services::{calculate_quote, parse_stay_dates};

/// Pricing API routes
pub fn router<C>() -> Router<AppState<C>>
where
    C: SeasonCatalog + Clone + 'static,
{
    Router::new().route("/api/pricing/calculate", post(calculate::<C>))
}

/// Quote a rental period
///
/// The body is parsed as JSON whatever its Content-Type. Browser callers
/// posting a plain string send `text/plain`.
async fn calculate<C>(
    State(state): State<AppState<C>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<QuoteResponse>>
where
    C: SeasonCatalog + Clone + 'static,
{
    let body = body.map_err(|e| AppError::Internal(format!("Unreadable request body: {}", e)))?;
    let request: CalculateQuoteRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Invalid JSON body: {}", e)))?;

    let (pickup, dropoff) = parse_stay_dates(
        request.pickup_date.as_deref(),
        request.dropoff_date.as_deref(),
    )?;

    let quote = calculate_quote(
        pickup,
        dropoff,
        &state.catalog,
        &state.schedule,
        &state.stay_limits,
    )
    .await?;

    Ok(Json(QuoteResponse::from(quote)))
}
