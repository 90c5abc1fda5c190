//! Pattern-based filtering for manifest discovery.
//!
//! Provides glob-style pattern matching for filtering object keys.
//! Supports both single patterns and multiple patterns with OR logic.

use glob::{MatchOptions, Pattern};
use sm_error::{Result, SmError};

use super::KeyFilter;

/// Glob patterns recognised as manifests.
pub const MANIFEST_PATTERNS: [&str; 2] = ["*.yml", "*.yaml"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A filter for matching object keys against a single glob pattern.
///
/// Matches against the full key by default. `*` also matches `/`, so
/// `*.yml` accepts `deploy/2024/app.yml`. Call
/// [`with_basename_only`](Self::with_basename_only) to match only the
/// portion after the last `/`.
///
/// # Pattern Syntax
///
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - `[abc]` matches any character in the brackets
/// - `[!abc]` matches any character not in the brackets
///
/// # Example
///
/// ```
/// use sm_manifest::filter::{KeyFilter, PatternFilter};
///
/// let filter = PatternFilter::new("*.yml").unwrap();
///
/// assert!(filter.matches_key("deploy/app.yml"));
/// assert!(!filter.matches_key("deploy/app.YML"));
/// assert!(!filter.matches_key("deploy/app.ymlx"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: String,
    compiled: Pattern,
    basename_only: bool,
}

impl PatternFilter {
    /// Create a new pattern filter.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern)
            .map_err(|e| SmError::Config(format!("Invalid glob pattern '{pattern}': {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
            basename_only: false,
        })
    }

    /// Set whether to match only the filename (after the last `/`).
    pub fn with_basename_only(mut self, basename_only: bool) -> Self {
        self.basename_only = basename_only;
        self
    }

    /// Get the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl KeyFilter for PatternFilter {
    fn matches_key(&self, key: &str) -> bool {
        let target = if self.basename_only {
            key.rsplit('/').next().unwrap_or(key)
        } else {
            key
        };
        self.compiled.matches_with(target, MATCH_OPTIONS)
    }

    fn description(&self) -> String {
        if self.basename_only {
            format!("pattern(basename='{}')", self.pattern)
        } else {
            format!("pattern('{}')", self.pattern)
        }
    }
}

/// A filter that matches keys against multiple patterns with OR logic.
///
/// A key passes the filter if it matches ANY of the configured patterns.
/// An empty pattern set matches nothing.
///
/// # Example
///
/// ```
/// use sm_manifest::filter::{KeyFilter, MultiPatternFilter};
///
/// let filter = MultiPatternFilter::manifests();
///
/// assert!(filter.matches_key("a.yaml"));
/// assert!(filter.matches_key("c.yml"));
/// assert!(!filter.matches_key("b.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct MultiPatternFilter {
    patterns: Vec<PatternFilter>,
}

impl MultiPatternFilter {
    /// Create a new multi-pattern filter.
    ///
    /// Returns an error if any pattern is invalid.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| PatternFilter::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The default manifest filter: `*.yml` OR `*.yaml`.
    pub fn manifests() -> Self {
        // Both patterns are constant and valid
        let patterns = MANIFEST_PATTERNS
            .iter()
            .filter_map(|p| PatternFilter::new(p).ok())
            .collect();
        Self { patterns }
    }

    /// Get the pattern strings.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.pattern()).collect()
    }
}

impl KeyFilter for MultiPatternFilter {
    fn matches_key(&self, key: &str) -> bool {
        self.patterns.iter().any(|p| p.matches_key(key))
    }

    fn description(&self) -> String {
        format!("patterns({:?})", self.patterns())
    }
}
