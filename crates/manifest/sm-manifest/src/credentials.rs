//! Credential resolution for S3 access.
//!
//! Resolution order:
//! 1. The explicit credentials file, or `~/.aws/credentials`. When no file is
//!    given and that does not exist, `~/.aws/config` is tried instead.
//! 2. If the resolved file exists, it is used with the requested profile.
//! 3. Otherwise static keys are read from `AWS_ACCESS_KEY` (falling back to
//!    `AWS_ACCESS_KEY_ID`) and `AWS_SECRET_KEY` (falling back to
//!    `AWS_SECRET_ACCESS_KEY`).
//! 4. With no keys either, the SDK default provider chain is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sm_error::{Result, SmError};
use tracing::debug;

/// Default shared credentials file.
pub const DEFAULT_CREDENTIALS_FILE: &str = "~/.aws/credentials";

/// Fallback shared config file, tried when the credentials file is missing.
pub const FALLBACK_CONFIG_FILE: &str = "~/.aws/config";

/// Default profile name.
pub const DEFAULT_PROFILE: &str = "default";

/// Where S3 credentials come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CredentialSource {
    /// A shared credentials file and the profile to read from it
    SharedFile { path: PathBuf, profile: String },

    /// Explicit access and secret keys
    Static {
        access_key: String,
        #[serde(skip_serializing, default)]
        secret_key: String,
    },

    /// The SDK default provider chain
    #[default]
    Default,
}

/// Resolve credentials using the process environment and home directory.
pub fn resolve_credentials(file: Option<&str>, profile: &str) -> Result<CredentialSource> {
    let home = dirs::home_dir();
    resolve_credentials_with(file, profile, home.as_deref(), |name| {
        std::env::var(name).ok()
    })
}

/// Resolve credentials with an explicit home directory and variable lookup.
pub fn resolve_credentials_with<F>(
    file: Option<&str>,
    profile: &str,
    home: Option<&Path>,
    env: F,
) -> Result<CredentialSource>
where
    F: Fn(&str) -> Option<String>,
{
    let path = credential_file_path(file, home)?;

    if path.exists() {
        debug!(path = %path.display(), profile, "Using shared credentials file");
        return Ok(CredentialSource::SharedFile {
            path,
            profile: profile.to_string(),
        });
    }

    let lookup = |primary: &str, fallback: &str| {
        env(primary)
            .filter(|v| !v.is_empty())
            .or_else(|| env(fallback).filter(|v| !v.is_empty()))
    };

    match (
        lookup("AWS_ACCESS_KEY", "AWS_ACCESS_KEY_ID"),
        lookup("AWS_SECRET_KEY", "AWS_SECRET_ACCESS_KEY"),
    ) {
        (Some(access_key), Some(secret_key)) => {
            debug!("Using static credentials from environment");
            Ok(CredentialSource::Static {
                access_key,
                secret_key,
            })
        }
        _ => {
            debug!(path = %path.display(), "No credentials file or keys, using default provider chain");
            Ok(CredentialSource::Default)
        }
    }
}

/// Pick the credentials file to use.
///
/// An explicit `file` is never replaced by the fallback, even when missing.
pub fn credential_file_path(file: Option<&str>, home: Option<&Path>) -> Result<PathBuf> {
    match file.filter(|f| !f.is_empty()) {
        Some(file) => expand_path(file, home),
        None => {
            let primary = expand_path(DEFAULT_CREDENTIALS_FILE, home)?;
            if primary.exists() {
                Ok(primary)
            } else {
                expand_path(FALLBACK_CONFIG_FILE, home)
            }
        }
    }
}

/// Expand a leading `~/` to the home directory, or make the path absolute.
pub fn expand_path(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = home.ok_or_else(|| {
            SmError::Config(format!("Cannot expand '{path}': home directory unknown"))
        })?;
        return Ok(home.join(rest));
    }

    std::path::absolute(path)
        .map_err(|e| SmError::Config(format!("Invalid path '{path}': {e}")))
}
