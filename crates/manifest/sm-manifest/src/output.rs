//! Writing selected manifests.

use std::io::Write;

use serde::{Deserialize, Serialize};
use sm_error::{Result, SmError};

use crate::RankedManifest;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One key per line (default)
    #[default]
    Plain,

    /// JSON Lines format - one `{"rank":..,"key":..}` object per line
    Jsonl,
}

/// Writes ranked manifests to any [`Write`] sink, one per line.
pub struct ManifestWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ManifestWriter<W> {
    /// Create a writer with the given format.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write every manifest in order, then flush.
    pub fn write_all(&mut self, manifests: &[RankedManifest]) -> Result<()> {
        for manifest in manifests {
            self.write_one(manifest)?;
        }
        self.writer
            .flush()
            .map_err(|e| SmError::Output(format!("Failed to flush output: {e}")))
    }

    fn write_one(&mut self, manifest: &RankedManifest) -> Result<()> {
        let line = match self.format {
            OutputFormat::Plain => manifest.key.clone(),
            OutputFormat::Jsonl => serde_json::to_string(manifest)
                .map_err(|e| SmError::Output(format!("JSON serialization failed: {e}")))?,
        };

        writeln!(self.writer, "{line}")
            .map_err(|e| SmError::Output(format!("Failed to write output: {e}")))
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
