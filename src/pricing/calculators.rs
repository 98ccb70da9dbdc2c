//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access. Everything here is
//! a function of its arguments only (never of "today"), so the same stay
//! against the same season snapshot always prices the same.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::models::{DefaultSchedule, DurationTier, Season};

/// Round to specified decimal places, halves away from zero.
///
/// This matches how the booking site has always displayed prices
/// (`Math.round(x * 100) / 100` for positive amounts).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use campervan_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.005), 2), dec!(1.01));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Number of days actually charged for a stay of `actual_days`.
///
/// A 2-day rental is billed as 3 days. Every other length is billed as is.
/// Callers reject non-positive lengths before getting here.
pub fn adjust_billing_days(actual_days: i64) -> i64 {
    if actual_days == 2 {
        3
    } else {
        actual_days
    }
}

/// Find the season active on `date`.
///
/// Seasons are scanned in the order given and the first one whose inclusive
/// range contains the date wins, so overlapping seasons resolve by catalog
/// order. Inactive seasons are skipped even if a caller hands them in.
pub fn season_for_date(date: NaiveDate, seasons: &[Season]) -> Option<&Season> {
    seasons.iter().find(|s| s.is_active && s.contains(date))
}

/// Per-day rate for a stay of `billing_days` total days.
///
/// The tier comes from the length of the whole stay, not from the days left
/// after the current one.
pub fn tier_rate(
    season: Option<&Season>,
    billing_days: i64,
    schedule: &DefaultSchedule,
) -> Decimal {
    rate_for_tier(season, DurationTier::for_billing_days(billing_days), schedule)
}

/// Rate of `tier` in `season`, falling back to the default schedule when
/// there is no season or the season leaves that tier empty.
pub fn rate_for_tier(
    season: Option<&Season>,
    tier: DurationTier,
    schedule: &DefaultSchedule,
) -> Decimal {
    season
        .and_then(|s| s.rate(tier))
        .unwrap_or_else(|| schedule.rates.rate(tier))
}

/// Days of a stay that fell under one season
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonDays {
    pub name: String,
    pub days: i64,
    /// Average rate charged for those days
    pub price_per_day: Decimal,
}

/// Result of walking every billed day of a stay
#[derive(Debug, Clone, PartialEq)]
pub struct StayPricing {
    pub total: Decimal,
    pub avg_per_day: Decimal,
    pub dominant_season: String,
    /// Seasons in order of first appearance in the stay
    pub breakdown: Vec<SeasonDays>,
}

/// Price a stay day by day using the tier of the whole stay.
pub fn price_stay(
    pickup: NaiveDate,
    billing_days: i64,
    seasons: &[Season],
    schedule: &DefaultSchedule,
) -> StayPricing {
    let tier = DurationTier::for_billing_days(billing_days);
    accumulate(pickup, billing_days, seasons, schedule, tier)
}

/// Price a stay as if no duration discount existed.
///
/// Every day pays the less-than-a-week rate of its season. The result is
/// only a reference for the discount percentage; nobody can book at it.
pub fn price_stay_without_discount(
    pickup: NaiveDate,
    billing_days: i64,
    seasons: &[Season],
    schedule: &DefaultSchedule,
) -> StayPricing {
    accumulate(pickup, billing_days, seasons, schedule, DurationTier::LessThanWeek)
}

struct SeasonTally<'a> {
    name: &'a str,
    days: i64,
    subtotal: Decimal,
}

fn accumulate(
    pickup: NaiveDate,
    billing_days: i64,
    seasons: &[Season],
    schedule: &DefaultSchedule,
    tier: DurationTier,
) -> StayPricing {
    if billing_days <= 0 {
        return StayPricing {
            total: Decimal::ZERO,
            avg_per_day: Decimal::ZERO,
            dominant_season: schedule.name.clone(),
            breakdown: Vec::new(),
        };
    }

    let mut total = Decimal::ZERO;
    // Insertion order matters: it breaks dominant-season ties.
    let mut tally: Vec<SeasonTally<'_>> = Vec::new();

    for date in pickup.iter_days().take(billing_days as usize) {
        let season = season_for_date(date, seasons);
        let rate = rate_for_tier(season, tier, schedule);
        let name = season.map_or(schedule.name.as_str(), |s| s.name.as_str());

        total += rate;
        match tally.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.days += 1;
                entry.subtotal += rate;
            }
            None => tally.push(SeasonTally {
                name,
                days: 1,
                subtotal: rate,
            }),
        }
    }

    // Strictly greater keeps the earliest season on ties
    let dominant_season = tally
        .iter()
        .fold(None::<&SeasonTally<'_>>, |best, entry| match best {
            Some(best) if entry.days <= best.days => Some(best),
            _ => Some(entry),
        })
        .map_or_else(|| schedule.name.clone(), |entry| entry.name.to_string());

    let breakdown = tally
        .iter()
        .map(|entry| SeasonDays {
            name: entry.name.to_string(),
            days: entry.days,
            price_per_day: round_money(entry.subtotal / Decimal::from(entry.days), 2),
        })
        .collect();

    StayPricing {
        avg_per_day: round_money(total / Decimal::from(billing_days), 2),
        total: round_money(total, 2),
        dominant_season,
        breakdown,
    }
}

/// Savings of the tiered price against the no-discount baseline
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountReport {
    pub savings: Decimal,
    /// Whole percent, never negative
    pub percentage: u32,
}

/// Compare the tiered total against the baseline total.
pub fn report_discount(real_total: Decimal, baseline_total: Decimal) -> DiscountReport {
    let savings = baseline_total - real_total;
    let percentage = if savings > Decimal::ZERO && baseline_total > Decimal::ZERO {
        round_money(savings / baseline_total * Decimal::ONE_HUNDRED, 0)
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    DiscountReport { savings, percentage }
}

/// Minimum rental length required by the season that dominates the stay.
///
/// Only the actual (unadjusted) days are counted and days outside every
/// season do not count towards any season. Ties keep the season seen first.
/// Falls back to the schedule minimum when no season matched or the
/// dominant season has no usable `min_days`.
pub fn required_min_days(
    pickup: NaiveDate,
    actual_days: i64,
    seasons: &[Season],
    schedule: &DefaultSchedule,
) -> i32 {
    let mut tally: Vec<(&Season, i64)> = Vec::new();

    for date in pickup.iter_days().take(actual_days.max(0) as usize) {
        if let Some(season) = season_for_date(date, seasons) {
            match tally.iter_mut().find(|(s, _)| s.id == season.id) {
                Some((_, days)) => *days += 1,
                None => tally.push((season, 1)),
            }
        }
    }

    let mut dominant: Option<(&Season, i64)> = None;
    for (season, days) in tally {
        if dominant.map_or(true, |(_, best)| days > best) {
            dominant = Some((season, days));
        }
    }

    dominant
        .and_then(|(season, _)| season.min_days)
        .filter(|days| *days > 0)
        .unwrap_or(schedule.min_days)
}

/// Pairs of active seasons whose date ranges overlap.
///
/// Overlaps make day resolution depend on catalog order, so callers log them.
pub fn overlapping_seasons(seasons: &[Season]) -> Vec<(&Season, &Season)> {
    let active: Vec<&Season> = seasons.iter().filter(|s| s.is_active).collect();
    let mut pairs = Vec::new();

    for (i, first) in active.iter().enumerate() {
        for second in &active[i + 1..] {
            if first.overlaps(second.start_date, second.end_date) {
                pairs.push((*first, *second));
            }
        }
    }

    pairs
}
