//! Builders shared by the pricing unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::Season;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Active season with all four tier rates set
pub fn season(name: &str, start: &str, end: &str, rates: [Decimal; 4]) -> Season {
    Season {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: None,
        start_date: date(start),
        end_date: date(end),
        price_less_than_week: Some(rates[0]),
        price_one_week: Some(rates[1]),
        price_two_weeks: Some(rates[2]),
        price_three_weeks: Some(rates[3]),
        min_days: None,
        year: None,
        is_active: true,
    }
}
