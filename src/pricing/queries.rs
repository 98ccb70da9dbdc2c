//! Database queries for the pricing engine.

use chrono::NaiveDate;
use sqlx::PgPool;

use super::catalog::{CatalogError, SeasonCatalog};
use super::models::Season;

/// Get active seasons overlapping `[start, end]` (both inclusive).
///
/// Ordered by start date, then id, so overlapping seasons resolve the same
/// way on every request instead of following heap order.
pub async fn get_active_seasons_overlapping(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Season>, CatalogError> {
    let seasons = sqlx::query_as::<_, Season>(
        r#"
        SELECT
            id, name, slug, start_date, end_date,
            price_less_than_week, price_one_week,
            price_two_weeks, price_three_weeks,
            min_days, year, is_active
        FROM seasons
        WHERE is_active = true
          AND start_date <= $2
          AND end_date >= $1
        ORDER BY start_date ASC, id ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(seasons)
}

/// Season catalog backed by the `seasons` table
#[derive(Clone)]
pub struct PgSeasonCatalog {
    pool: PgPool,
}

impl PgSeasonCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SeasonCatalog for PgSeasonCatalog {
    async fn active_seasons(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Season>, CatalogError> {
        get_active_seasons_overlapping(&self.pool, start, end).await
    }
}
