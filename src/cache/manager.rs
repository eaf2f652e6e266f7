//! Cache manager for place details
//!
//! Provides a `PlaceCache` that keeps the last successfully fetched
//! `PlaceRecord` in memory with a fetch timestamp, supporting graceful
//! degradation when the Places API is unavailable.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::data::{PlaceRecord, PlaceSource, PlacesError};

/// Default freshness window in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Wrapper for the cached record
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached data
    data: PlaceRecord,
    /// When the data was fetched, in epoch milliseconds
    fetched_at_ms: i64,
}

/// Freshness of the cache slot at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    /// Nothing has been fetched yet, or the cache was cleared
    Empty,
    /// An entry younger than the TTL
    Fresh,
    /// An entry at or past the TTL, still served when a refetch fails
    Stale,
}

/// Errors surfaced by a cache read
#[derive(Debug, Error)]
pub enum CacheError {
    /// The fetch failed and there was no earlier data to fall back on
    #[error("Failed to fetch restaurant details. Please try again later.")]
    FetchFailed(#[source] PlacesError),
}

/// In-memory cache in front of a `PlaceSource`
///
/// Reads inside the TTL never touch the network. Once the entry is stale the
/// next read refetches; if that fails, the stale record is returned and its
/// timestamp is kept so the following read tries again. Only a failure with
/// no entry at all reaches the caller.
///
/// The slot lock is never held across the fetch, so concurrent reads of an
/// empty or stale slot may each fetch. The last write wins.
pub struct PlaceCache {
    source: Arc<dyn PlaceSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    key: String,
    slot: RwLock<Option<CacheEntry>>,
}

impl PlaceCache {
    /// Creates an empty cache using the system clock
    pub fn new(source: Arc<dyn PlaceSource>, ttl: Duration) -> Self {
        let key = format!("restaurant_{}", source.place_id());
        Self {
            source,
            clock: Arc::new(SystemClock),
            ttl,
            key,
            slot: RwLock::new(None),
        }
    }

    /// Replaces the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Key of the single cache slot
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current freshness, evaluated against the clock right now
    pub fn state(&self) -> CacheState {
        match self.snapshot() {
            None => CacheState::Empty,
            Some(entry) if self.is_fresh(&entry) => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }

    /// Returns the place record, fetching when the cache is empty or stale
    ///
    /// # Returns
    /// * `Ok(PlaceRecord)` - fresh cached data, newly fetched data, or stale
    ///   data when a refetch failed
    /// * `Err(CacheError::FetchFailed)` - the fetch failed and nothing was cached
    pub async fn read(&self) -> Result<PlaceRecord, CacheError> {
        let cached = self.snapshot();

        if let Some(entry) = &cached {
            if self.is_fresh(entry) {
                debug!(key = %self.key, "returning cached place data");
                return Ok(entry.data.clone());
            }
        }

        info!(key = %self.key, "fetching place data from provider");

        match self.source.fetch_place().await {
            Ok(record) => {
                self.store(record.clone());
                Ok(record)
            }
            Err(error) => {
                warn!(key = %self.key, %error, "place fetch failed");
                match cached {
                    Some(entry) => {
                        warn!(
                            key = %self.key,
                            age_secs = self.age_millis(&entry) / 1000,
                            "returning expired cached place data"
                        );
                        Ok(entry.data)
                    }
                    None => Err(CacheError::FetchFailed(error)),
                }
            }
        }
    }

    /// Drops the cached entry so the next read fetches
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
        info!(key = %self.key, "place cache cleared");
    }

    fn snapshot(&self) -> Option<CacheEntry> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, data: PlaceRecord) {
        let entry = CacheEntry {
            data,
            fetched_at_ms: self.clock.now_millis(),
        };
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
    }

    fn age_millis(&self, entry: &CacheEntry) -> i64 {
        self.clock.now_millis() - entry.fetched_at_ms
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        self.age_millis(entry) < ttl_ms
    }
}
