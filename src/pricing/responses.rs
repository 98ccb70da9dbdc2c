//! Response DTOs for pricing API endpoints.
//!
//! Money goes out as JSON numbers, which is what the booking pages and the
//! checkout already read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::SeasonDays;
use super::services::Quote;

/// Response for a quote calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResponse {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    /// Calendar days of the stay
    pub days: i64,
    /// Days actually billed (2-day stays bill 3)
    pub pricing_days: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub real_price_per_day: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub real_total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price_per_day: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_total_price: Decimal,
    pub duration_discount_percentage: u32,
    pub season: String,
    pub min_days: i32,
    pub season_breakdown: Vec<SeasonBreakdownResponse>,
}

/// One season's share of the stay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonBreakdownResponse {
    pub name: String,
    pub days: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
}

impl From<SeasonDays> for SeasonBreakdownResponse {
    fn from(days: SeasonDays) -> Self {
        Self {
            name: days.name,
            days: days.days,
            price_per_day: days.price_per_day,
        }
    }
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            pickup_date: quote.pickup_date,
            dropoff_date: quote.dropoff_date,
            days: quote.days,
            pricing_days: quote.pricing_days,
            real_price_per_day: quote.real_price_per_day,
            real_total_price: quote.real_total_price,
            base_price_per_day: quote.base_price_per_day,
            base_total_price: quote.base_total_price,
            duration_discount_percentage: quote.duration_discount_percentage,
            season: quote.season,
            min_days: quote.min_days,
            season_breakdown: quote
                .season_breakdown
                .into_iter()
                .map(SeasonBreakdownResponse::from)
                .collect(),
        }
    }
}

/// Error body returned by every pricing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
