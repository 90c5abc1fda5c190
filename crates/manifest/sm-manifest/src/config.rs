//! Configuration types for a manifest query.

use serde::{Deserialize, Serialize};
use sm_error::Result;

use crate::filter::MultiPatternFilter;
use crate::output::OutputFormat;
use crate::selector::Selection;

/// Configuration for one query run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Which manifests to return
    pub selection: Selection,

    /// How results are written
    pub output_format: OutputFormat,

    /// Glob patterns replacing the default `*.yml` / `*.yaml` set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl QueryConfig {
    /// Create a new query configuration with defaults (rank 1, plain output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Replace the manifest patterns.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Build the key filter for this query.
    ///
    /// Without custom patterns this is [`MultiPatternFilter::manifests`].
    pub fn build_filter(&self) -> Result<MultiPatternFilter> {
        if self.patterns.is_empty() {
            Ok(MultiPatternFilter::manifests())
        } else {
            MultiPatternFilter::new(&self.patterns[..])
        }
    }
}
