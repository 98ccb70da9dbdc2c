#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tower::ServiceExt;
use uuid::Uuid;

use campervan_pricing::pricing::{
    CatalogError, DefaultSchedule, Season, SeasonCatalog, StayLimits,
};
use campervan_pricing::{app, AppState};

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

/// Catalog whose database is always down
#[derive(Clone)]
pub struct UnavailableCatalog;

impl SeasonCatalog for UnavailableCatalog {
    async fn active_seasons(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Season>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

/// Catalog that panics mid-request
#[derive(Clone)]
pub struct PanickingCatalog;

impl SeasonCatalog for PanickingCatalog {
    async fn active_seasons(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Season>, CatalogError> {
        panic!("season row decoding blew up")
    }
}

pub fn test_app<C>(catalog: C) -> Router
where
    C: SeasonCatalog + Clone + 'static,
{
    app(AppState::new(
        catalog,
        DefaultSchedule::default(),
        StayLimits::default(),
    ))
}

/// POST a JSON body to the quote endpoint and decode the JSON reply
pub async fn post_quote(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    post_quote_as(app, Some("application/json"), body).await
}

/// POST a raw body with the given Content-Type, or none at all
pub async fn post_quote_as(
    app: Router,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/pricing/calculate");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}
