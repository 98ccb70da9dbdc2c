//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to quote a rental period.
///
/// Dates stay as raw strings here so a missing date and a malformed one can
/// be reported differently.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateQuoteRequest {
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub dropoff_date: Option<String>,
}
