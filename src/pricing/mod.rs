//! Seasonal pricing engine.
//!
//! Turns a pickup/dropoff date pair into a quote: every billed day is priced
//! at its season's rate for the duration tier of the whole stay, and the
//! result is compared against the short-stay rate to report the duration
//! discount.

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use calculators::round_money;
pub use catalog::{CatalogError, SeasonCatalog};
pub use models::{DefaultSchedule, DurationTier, Season, StayLimits, TierRates};
pub use queries::PgSeasonCatalog;
pub use routes::router;
pub use services::{calculate_quote, quote_with_seasons, PricingError, Quote};
