//! Cache module for place details
//!
//! This module provides an in-memory cache in front of the Places fetcher
//! with a configurable TTL (time-to-live). It supports graceful degradation
//! by serving the last known record when a refetch fails, allowing the site
//! to keep rendering while the API is unavailable.

mod manager;

pub use manager::{CacheError, CacheState, PlaceCache, DEFAULT_CACHE_TTL_SECS};
