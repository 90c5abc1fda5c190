//! S3 client and listing functionality.
//!
//! This module provides S3 operations for finding manifests:
//! - Client configuration with shared-file, static and LocalStack support
//! - A single-request object listing

mod client;
mod list;

pub use client::{DEFAULT_REGION, S3Config, create_s3_client};
pub use list::{ListingPage, S3Object, S3Source, list_objects};
