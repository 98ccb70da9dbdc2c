//! Quote orchestration.
//!
//! Validates the stay, loads seasons from the catalog and composes the
//! calculators into a `Quote`. This is the only pricing code that awaits.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use super::calculators::{
    adjust_billing_days, overlapping_seasons, price_stay, price_stay_without_discount,
    report_discount, required_min_days, SeasonDays,
};
use super::catalog::{CatalogError, SeasonCatalog};
use super::models::{DefaultSchedule, DurationTier, Season, StayLimits};

/// Priced stay
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub days: i64,
    pub pricing_days: i64,
    pub real_price_per_day: Decimal,
    pub real_total_price: Decimal,
    pub base_price_per_day: Decimal,
    pub base_total_price: Decimal,
    pub duration_discount_percentage: u32,
    pub season: String,
    pub min_days: i32,
    pub season_breakdown: Vec<SeasonDays>,
}

/// Pricing calculation error types
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Fechas requeridas")]
    MissingDates,

    #[error("Formato de fecha inválido: {value}")]
    InvalidDate { value: String },

    #[error("Periodo inválido: {pickup} -> {dropoff}")]
    InvalidPeriod { pickup: NaiveDate, dropoff: NaiveDate },

    #[error("Periodo demasiado largo: {days} días (máximo {max_days})")]
    StayTooLong { days: i64, max_days: i64 },

    #[error("Error al obtener temporadas: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Season {season_id} is malformed: {reason}")]
    MalformedSeason { season_id: Uuid, reason: String },
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the raw request dates.
///
/// Missing or blank dates are reported before malformed ones, so a request
/// with one blank and one garbage date is still "missing dates".
pub fn parse_stay_dates(
    pickup: Option<&str>,
    dropoff: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), PricingError> {
    let pickup = pickup.map(str::trim).filter(|s| !s.is_empty());
    let dropoff = dropoff.map(str::trim).filter(|s| !s.is_empty());

    let (Some(pickup), Some(dropoff)) = (pickup, dropoff) else {
        return Err(PricingError::MissingDates);
    };

    Ok((parse_date(pickup)?, parse_date(dropoff)?))
}

fn parse_date(value: &str) -> Result<NaiveDate, PricingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| PricingError::InvalidDate {
        value: value.to_string(),
    })
}

/// Actual and billed day counts of a stay.
///
/// Rejects empty or reversed periods, and periods longer than
/// `limits.max_days`.
pub fn stay_days(
    pickup: NaiveDate,
    dropoff: NaiveDate,
    limits: &StayLimits,
) -> Result<(i64, i64), PricingError> {
    let actual_days = (dropoff - pickup).num_days();
    if actual_days <= 0 {
        return Err(PricingError::InvalidPeriod { pickup, dropoff });
    }
    if actual_days > limits.max_days {
        return Err(PricingError::StayTooLong {
            days: actual_days,
            max_days: limits.max_days,
        });
    }
    Ok((actual_days, adjust_billing_days(actual_days)))
}

/// Last date the season catalog has to cover for this stay.
///
/// The catalog is queried over `[pickup, dropoff]` inclusive. Billed days run
/// `pickup .. pickup + billing_days`, so with the current 2 -> 3 rule the
/// extra billed day is the dropoff date itself and stays inside the window.
/// Should billing ever reach past dropoff, the window grows to match and a
/// warning is logged.
pub fn catalog_window_end(pickup: NaiveDate, dropoff: NaiveDate, billing_days: i64) -> NaiveDate {
    let offset = u64::try_from(billing_days.saturating_sub(1)).unwrap_or(0);
    let last_billed = pickup.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX);

    if last_billed > dropoff {
        warn!(
            %pickup,
            %dropoff,
            %last_billed,
            "Billed days extend past dropoff, widening season lookup"
        );
        last_billed
    } else {
        dropoff
    }
}

/// Reject season rows the engine cannot price with.
fn check_seasons(seasons: &[Season]) -> Result<(), PricingError> {
    for season in seasons.iter().filter(|s| s.is_active) {
        if season.start_date > season.end_date {
            return Err(PricingError::MalformedSeason {
                season_id: season.id,
                reason: format!(
                    "start_date {} is after end_date {}",
                    season.start_date, season.end_date
                ),
            });
        }

        for tier in DurationTier::ALL {
            if let Some(rate) = season.rate(tier) {
                if rate < Decimal::ZERO {
                    return Err(PricingError::MalformedSeason {
                        season_id: season.id,
                        reason: format!("negative {:?} rate {}", tier, rate),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Quote a stay against a season snapshot the caller already holds.
pub fn quote_with_seasons(
    pickup: NaiveDate,
    dropoff: NaiveDate,
    seasons: &[Season],
    schedule: &DefaultSchedule,
    limits: &StayLimits,
) -> Result<Quote, PricingError> {
    let (actual_days, billing_days) = stay_days(pickup, dropoff, limits)?;
    check_seasons(seasons)?;

    let real = price_stay(pickup, billing_days, seasons, schedule);
    let baseline = price_stay_without_discount(pickup, billing_days, seasons, schedule);
    let discount = report_discount(real.total, baseline.total);
    let min_days = required_min_days(pickup, actual_days, seasons, schedule);

    Ok(Quote {
        pickup_date: pickup,
        dropoff_date: dropoff,
        days: actual_days,
        pricing_days: billing_days,
        real_price_per_day: real.avg_per_day,
        real_total_price: real.total,
        base_price_per_day: baseline.avg_per_day,
        base_total_price: baseline.total,
        duration_discount_percentage: discount.percentage,
        season: real.dominant_season,
        min_days,
        season_breakdown: real.breakdown,
    })
}

/// Calculate the quote for a rental period.
///
/// Loads the active seasons overlapping the stay from `catalog` and prices
/// every billed day. A catalog failure is returned as is; pricing never
/// falls back to "no seasons" because that would quote every stay at the
/// default schedule.
#[tracing::instrument(skip(catalog, schedule, limits))]
pub async fn calculate_quote<C: SeasonCatalog>(
    pickup: NaiveDate,
    dropoff: NaiveDate,
    catalog: &C,
    schedule: &DefaultSchedule,
    limits: &StayLimits,
) -> Result<Quote, PricingError> {
    let (_, billing_days) = stay_days(pickup, dropoff, limits)?;
    let window_end = catalog_window_end(pickup, dropoff, billing_days);

    let seasons = catalog.active_seasons(pickup, window_end).await?;

    for (first, second) in overlapping_seasons(&seasons) {
        warn!(
            "Seasons '{}' ({}) and '{}' ({}) overlap; the first in catalog order wins",
            first.name, first.id, second.name, second.id
        );
    }

    let quote = quote_with_seasons(pickup, dropoff, &seasons, schedule, limits)?;

    debug!(
        days = quote.days,
        pricing_days = quote.pricing_days,
        total = %quote.real_total_price,
        season = %quote.season,
        "Quote calculated"
    );

    Ok(quote)
}
