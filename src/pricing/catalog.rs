//! Season catalog seam.
//!
//! The pricing engine only needs "the active seasons touching this range".
//! Postgres provides them in production (see `queries`), the moka-backed
//! wrapper in `crate::cache` sits in front of it, and a plain `Vec<Season>`
//! serves tests and callers that already hold a snapshot.

use std::future::Future;

use chrono::NaiveDate;

use super::models::Season;

/// Season catalog lookup failure
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Season catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of active pricing seasons.
///
/// Implementations return every active season whose inclusive range overlaps
/// `[start, end]`. The order returned is the order the day resolver scans,
/// so it must stay stable for the duration of one request.
pub trait SeasonCatalog: Send + Sync {
    fn active_seasons(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Season>, CatalogError>> + Send;
}

impl SeasonCatalog for Vec<Season> {
    async fn active_seasons(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Season>, CatalogError> {
        Ok(self
            .iter()
            .filter(|s| s.is_active && s.overlaps(start, end))
            .cloned()
            .collect())
    }
}
