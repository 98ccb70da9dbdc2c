//! In-memory caching using moka
//!
//! Season rows change a few times a year from the admin backoffice, while
//! the booking pages ask for quotes on every date change, so catalog lookups
//! are cached per date range with a short TTL.

use chrono::NaiveDate;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::pricing::catalog::{CatalogError, SeasonCatalog};
use crate::pricing::models::Season;

/// Application cache holding season lookups
#[derive(Clone)]
pub struct AppCache {
    /// Active seasons ((start, end) -> seasons overlapping that range)
    pub seasons: Cache<(NaiveDate, NaiveDate), Arc<Vec<Season>>>,
}

impl AppCache {
    /// Create a new cache instance with the configured TTL and capacity
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            seasons: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            season_ranges_size: self.seasons.entry_count(),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60), 1_000)
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub season_ranges_size: u64,
}

/// Season catalog that remembers successful lookups.
///
/// Failures are passed through and never cached, so an outage does not
/// outlive the database coming back.
#[derive(Clone)]
pub struct CachedSeasonCatalog<C> {
    inner: C,
    cache: AppCache,
}

impl<C> CachedSeasonCatalog<C> {
    pub fn new(inner: C, cache: AppCache) -> Self {
        Self { inner, cache }
    }
}

impl<C: SeasonCatalog> SeasonCatalog for CachedSeasonCatalog<C> {
    async fn active_seasons(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Season>, CatalogError> {
        let key = (start, end);

        if let Some(cached) = self.cache.seasons.get(&key).await {
            debug!("Cache HIT for seasons {}..{}", start, end);
            return Ok((*cached).clone());
        }

        debug!("Cache MISS for seasons {}..{}", start, end);
        let seasons = self.inner.active_seasons(start, end).await?;
        self.cache
            .seasons
            .insert(key, Arc::new(seasons.clone()))
            .await;
        debug!("Season cache stats: {:?}", self.cache.stats());

        Ok(seasons)
    }
}
