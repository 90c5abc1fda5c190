//! sm-manifest - manifest discovery and selection for S3 buckets.
//!
//! This crate lists the objects of a bucket, keeps the manifest-like keys
//! (`*.yml` / `*.yaml`), orders them newest first and answers ranked queries.
//! It supports:
//!
//! - Glob pattern filtering of object keys (case-sensitive, full key)
//! - Descending lexicographic ordering with 1-based ranked access
//! - Credential resolution from shared credential files or environment keys
//! - Single-request S3 listing with LocalStack support
//! - Output to any writer as plain lines or JSONL
//!
//! # Ordering precondition
//!
//! "Newest" means the lexicographically largest key. This only matches
//! real recency when keys embed sortable, fixed-width timestamps or
//! monotonically increasing identifiers (for example
//! `deploy/2024-03-01T120000.yml`). Object modification times are not used.
//!
//! # Example
//!
//! ```ignore
//! use sm_manifest::{QueryConfig, S3Config, S3Source, Selection, create_s3_client, run_query};
//!
//! let s3_config = S3Config::new("my-bucket").with_region("ap-northeast-1");
//! let client = create_s3_client(&s3_config).await?;
//! let source = S3Source::new(client, &s3_config);
//!
//! let config = QueryConfig::new().with_selection(Selection::Latest);
//! let manifests = run_query(&source, &config).await?;
//! println!("{}", manifests[0].key);
//! ```

use serde::{Deserialize, Serialize};

pub mod config;
pub mod credentials;
pub mod filter;
pub mod output;
pub mod runner;
pub mod s3;
pub mod selector;
pub mod source;

pub use config::QueryConfig;
pub use credentials::{CredentialSource, resolve_credentials};
pub use filter::{KeyFilter, MultiPatternFilter, PatternFilter, filter_manifests};
pub use output::{ManifestWriter, OutputFormat};
pub use runner::{run_query, select_from_keys};
pub use s3::{S3Config, S3Object, S3Source, create_s3_client, list_objects};
pub use selector::{ManifestList, Selection};
pub use source::{ManifestSource, StaticSource};

/// A selected manifest together with its rank in the ordered list.
///
/// Rank 1 is the newest manifest; the largest rank is the oldest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedManifest {
    /// 1-based position in the descending manifest list
    pub rank: usize,

    /// The object key of the manifest
    pub key: String,
}

impl RankedManifest {
    /// Create a new ranked manifest.
    pub fn new(rank: usize, key: impl Into<String>) -> Self {
        Self {
            rank,
            key: key.into(),
        }
    }
}
