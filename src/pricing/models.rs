//! Season and tier models for the pricing engine.
//!
//! `Season` rows come straight from the `seasons` table via sqlx's FromRow
//! derive. The table is owned by the admin backoffice; this service only
//! reads it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::FromRow;
use uuid::Uuid;

/// Season from the `seasons` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Season {
    pub id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_less_than_week: Option<Decimal>,
    pub price_one_week: Option<Decimal>,
    pub price_two_weeks: Option<Decimal>,
    pub price_three_weeks: Option<Decimal>,
    pub min_days: Option<i32>,
    pub year: Option<i32>,
    pub is_active: bool,
}

impl Season {
    /// Check if the season's inclusive date range covers `date`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check if the season's range intersects the inclusive range `[start, end]`
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Per-day rate stored for `tier`, if the admin filled it in
    pub fn rate(&self, tier: DurationTier) -> Option<Decimal> {
        match tier {
            DurationTier::LessThanWeek => self.price_less_than_week,
            DurationTier::OneWeek => self.price_one_week,
            DurationTier::TwoWeeks => self.price_two_weeks,
            DurationTier::ThreeWeeks => self.price_three_weeks,
        }
    }
}

/// Duration bucket that decides which per-day rate a stay pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationTier {
    LessThanWeek,
    OneWeek,
    TwoWeeks,
    ThreeWeeks,
}

impl DurationTier {
    pub const ALL: [DurationTier; 4] = [
        DurationTier::LessThanWeek,
        DurationTier::OneWeek,
        DurationTier::TwoWeeks,
        DurationTier::ThreeWeeks,
    ];

    /// Pick the tier from the total billed length of the stay.
    ///
    /// Boundaries are inclusive of the higher tier: 7 days is already
    /// `OneWeek`, 14 is `TwoWeeks`, 21 is `ThreeWeeks`.
    pub fn for_billing_days(billing_days: i64) -> Self {
        if billing_days >= 21 {
            DurationTier::ThreeWeeks
        } else if billing_days >= 14 {
            DurationTier::TwoWeeks
        } else if billing_days >= 7 {
            DurationTier::OneWeek
        } else {
            DurationTier::LessThanWeek
        }
    }
}

/// Four per-day rates, one per duration tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierRates {
    pub less_than_week: Decimal,
    pub one_week: Decimal,
    pub two_weeks: Decimal,
    pub three_weeks: Decimal,
}

impl TierRates {
    pub fn rate(&self, tier: DurationTier) -> Decimal {
        match tier {
            DurationTier::LessThanWeek => self.less_than_week,
            DurationTier::OneWeek => self.one_week,
            DurationTier::TwoWeeks => self.two_weeks,
            DurationTier::ThreeWeeks => self.three_weeks,
        }
    }
}

/// Fallback schedule used for days outside every season and for tier rates
/// a season leaves empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSchedule {
    /// Label reported for days priced by this schedule
    pub name: String,
    pub rates: TierRates,
    /// Minimum rental length when no season dominates the stay
    pub min_days: i32,
}

impl Default for DefaultSchedule {
    fn default() -> Self {
        Self {
            name: "Low Season".to_string(),
            rates: TierRates {
                less_than_week: dec!(95),
                one_week: dec!(85),
                two_weeks: dec!(75),
                three_weeks: dec!(65),
            },
            min_days: 2,
        }
    }
}

/// Longest stay, in actual days, a single quote may cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayLimits {
    pub max_days: i64,
}

impl Default for StayLimits {
    fn default() -> Self {
        Self { max_days: 365 }
    }
}
