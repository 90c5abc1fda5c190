//! Sources of raw object keys.
//!
//! - [`StaticSource`] - keys held in memory
//! - [`S3Source`](crate::s3::S3Source) - a single S3 bucket listing

use async_trait::async_trait;
use sm_error::Result;

/// Trait for producing the raw key listing of a bucket.
///
/// Implementations return every key they know about; filtering and ordering
/// happen afterwards in [`ManifestList`](crate::ManifestList).
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the raw object keys.
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Get a human-readable description of the source, used in logs.
    fn describe(&self) -> String;
}

/// A source backed by a fixed set of keys.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    keys: Vec<String>,
}

impl StaticSource {
    /// Create a source that always returns `keys`.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ManifestSource for StaticSource {
    async fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.keys.clone())
    }

    fn describe(&self) -> String {
        format!("static({} keys)", self.keys.len())
    }
}
