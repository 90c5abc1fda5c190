//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for LocalStack-based
//! integration testing and in-memory sources.

pub mod localstack;

pub use localstack::LocalStackTestContext;

use async_trait::async_trait;
use sm_error::{Result, SmError};
use sm_manifest::ManifestSource;

/// A source whose listing always fails.
pub struct FailingSource {
    pub message: String,
}

#[async_trait]
impl ManifestSource for FailingSource {
    async fn list_keys(&self) -> Result<Vec<String>> {
        Err(SmError::Listing(self.message.clone()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}
