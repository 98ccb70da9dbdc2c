mod common;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use campervan_pricing::pricing::calculators::adjust_billing_days;
use campervan_pricing::pricing::{
    quote_with_seasons, DefaultSchedule, PricingError, Quote, Season, StayLimits,
};
use common::date;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base_date() -> NaiveDate {
    date("2026-01-01")
}

fn arb_stay() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..365, 1u64..60).prop_map(|(offset, len)| {
        let pickup = base_date() + Days::new(offset);
        (pickup, pickup + Days::new(len))
    })
}

/// Tier rates that never increase with stay length, like every real season
fn arb_rates() -> impl Strategy<Value = [Decimal; 4]> {
    (80i64..300, 0i64..20, 0i64..20, 0i64..20).prop_map(|(short, d1, d2, d3)| {
        let one = short - d1;
        let two = one - d2;
        let three = two - d3;
        [short, one, two, three].map(Decimal::from)
    })
}

fn arb_season() -> impl Strategy<Value = Season> {
    (0u64..400, 1u64..60, arb_rates()).prop_map(|(offset, len, rates)| {
        let start = base_date() + Days::new(offset);
        Season {
            id: Uuid::new_v4(),
            name: format!("Season {}", offset),
            slug: None,
            start_date: start,
            end_date: start + Days::new(len),
            price_less_than_week: Some(rates[0]),
            price_one_week: Some(rates[1]),
            price_two_weeks: Some(rates[2]),
            price_three_weeks: Some(rates[3]),
            min_days: None,
            year: Some(2026),
            is_active: true,
        }
    })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Season>> {
    prop::collection::vec(arb_season(), 0..5)
}

/// Quote with the default schedule and stay limits
fn quote(pickup: NaiveDate, dropoff: NaiveDate, catalog: &[Season]) -> Result<Quote, PricingError> {
    quote_with_seasons(
        pickup,
        dropoff,
        catalog,
        &DefaultSchedule::default(),
        &StayLimits::default(),
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn billing_days_follow_two_day_rule((pickup, dropoff) in arb_stay(), catalog in arb_catalog()) {
        let quote = quote(pickup, dropoff, &catalog).unwrap();

        if quote.days == 2 {
            prop_assert_eq!(quote.pricing_days, 3);
        } else {
            prop_assert_eq!(quote.pricing_days, quote.days);
        }
        prop_assert_eq!(quote.pricing_days, adjust_billing_days(quote.days));
    }

    #[test]
    fn tiered_total_never_exceeds_baseline(
        (pickup, dropoff) in arb_stay(),
        catalog in arb_catalog(),
    ) {
        let quote = quote(pickup, dropoff, &catalog).unwrap();

        prop_assert!(quote.real_total_price <= quote.base_total_price);
        prop_assert!(quote.duration_discount_percentage <= 100);
    }

    #[test]
    fn average_rate_matches_total((pickup, dropoff) in arb_stay(), catalog in arb_catalog()) {
        let quote = quote(pickup, dropoff, &catalog).unwrap();

        let days = Decimal::from(quote.pricing_days);
        let drift = (quote.real_price_per_day * days - quote.real_total_price).abs();
        // The average is rounded once, so each billed day carries at most half a cent.
        prop_assert!(drift <= Decimal::new(5, 3) * days);
    }

    #[test]
    fn quotes_are_deterministic((pickup, dropoff) in arb_stay(), catalog in arb_catalog()) {
        let first = quote(pickup, dropoff, &catalog).unwrap();
        let second = quote(pickup, dropoff, &catalog).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn breakdown_days_add_up((pickup, dropoff) in arb_stay(), catalog in arb_catalog()) {
        let quote = quote(pickup, dropoff, &catalog).unwrap();

        let counted: i64 = quote.season_breakdown.iter().map(|s| s.days).sum();
        prop_assert_eq!(counted, quote.pricing_days);
        prop_assert!(quote.season_breakdown.iter().any(|s| s.name == quote.season));
    }

    #[test]
    fn non_positive_periods_are_rejected(offset in 0u64..365, back in 0u64..30) {
        let dropoff = base_date() + Days::new(offset);
        let pickup = dropoff + Days::new(back);

        let result = quote(pickup, dropoff, &[]);
        let is_invalid_period = matches!(result, Err(PricingError::InvalidPeriod { .. }));
        prop_assert!(is_invalid_period);
    }

    #[test]
    fn stays_past_the_limit_are_rejected(offset in 0u64..365, extra in 1u64..100_000) {
        let pickup = base_date() + Days::new(offset);
        let max_days = StayLimits::default().max_days as u64;
        let dropoff = pickup + Days::new(max_days + extra);

        let result = quote(pickup, dropoff, &[]);
        let is_too_long = matches!(result, Err(PricingError::StayTooLong { .. }));
        prop_assert!(is_too_long);
    }
}

#[test]
fn tier_boundaries_are_inclusive_of_higher_tier() {
    let catalog = vec![common::season(
        "All Year",
        "2026-01-01",
        "2026-12-31",
        [Decimal::from(120), Decimal::from(110), Decimal::from(100), Decimal::from(90)],
    )];
    let pickup = date("2026-03-01");

    let per_day = |len: u64| {
        quote(pickup, pickup + Days::new(len), &catalog)
            .unwrap()
            .real_price_per_day
    };

    assert_eq!(per_day(6), Decimal::from(120));
    assert_eq!(per_day(7), Decimal::from(110));
    assert_eq!(per_day(13), Decimal::from(110));
    assert_eq!(per_day(14), Decimal::from(100));
    assert_eq!(per_day(21), Decimal::from(90));
}

#[test]
fn dominant_season_tie_goes_to_first_in_catalog() {
    let catalog = vec![
        common::season("Late June", "2026-06-25", "2026-06-30", [Decimal::from(110); 4]),
        common::season("Early July", "2026-07-01", "2026-07-10", [Decimal::from(150); 4]),
    ];

    let quote = quote(date("2026-06-27"), date("2026-07-05"), &catalog).unwrap();

    // 4 days each side of the boundary
    assert_eq!(quote.pricing_days, 8);
    assert_eq!(quote.season, "Late June");
}
