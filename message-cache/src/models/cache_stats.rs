//! Aggregate size metrics for the cache.
//!
//! Returned by MessageCache::stats and logged periodically by ingestion.

/// Entry count and approximate heap footprint of the cached records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub approx_bytes: usize,
}
