//! Key filtering for manifest discovery.
//!
//! This module provides the [`KeyFilter`] trait and glob-based
//! implementations:
//! - [`PatternFilter`] - a single glob pattern
//! - [`MultiPatternFilter`] - several patterns combined with OR logic
//!
//! [`MultiPatternFilter::manifests`] is the default manifest filter and
//! keeps keys ending in `.yml` or `.yaml`.

mod pattern;

pub use pattern::{MANIFEST_PATTERNS, MultiPatternFilter, PatternFilter};

/// Trait for filtering object keys.
///
/// Filters are pure predicates over the raw key string. They never fail and
/// never reorder their input.
pub trait KeyFilter: Send + Sync {
    /// Check if a key passes the filter.
    fn matches_key(&self, key: &str) -> bool;

    /// Get a human-readable description of the filter, used in logs.
    fn description(&self) -> String;

    /// Retain the keys that pass the filter, preserving their relative order.
    fn filter_keys(&self, keys: Vec<String>) -> Vec<String> {
        keys.into_iter().filter(|key| self.matches_key(key)).collect()
    }
}

/// Retain the manifest keys (`*.yml` or `*.yaml`) of a listing.
///
/// Matching is case-sensitive and anchored to the end of the key, so
/// `file.ymlx` and `FILE.YML` are both rejected.
pub fn filter_manifests(keys: Vec<String>) -> Vec<String> {
    MultiPatternFilter::manifests().filter_keys(keys)
}
