//! S3 object listing.
//!
//! Listing is a single `ListObjectsV2` request. Continuation tokens are not
//! followed: a truncated response is logged and the first page is used.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use sm_error::{Result, SmError};
use tracing::{debug, warn};

use super::S3Config;
use crate::source::ManifestSource;

/// Represents an S3 object found during listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Object {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,
}

/// One page of listing results.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Objects in the order S3 returned them
    pub objects: Vec<S3Object>,

    /// Whether S3 reported more results beyond this page
    pub truncated: bool,
}

impl ListingPage {
    /// Total size of the listed objects in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.objects.iter().map(|obj| obj.size).sum()
    }

    /// Consume the page, keeping only the keys.
    pub fn into_keys(self) -> Vec<String> {
        self.objects.into_iter().map(|obj| obj.key).collect()
    }
}

/// List objects in an S3 bucket with optional prefix filtering.
///
/// Directory markers (keys ending with `/`) and empty keys are skipped.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: Option<&str>,
) -> Result<ListingPage> {
    let mut req = client.list_objects_v2().bucket(bucket);

    if let Some(prefix) = prefix {
        req = req.prefix(prefix);
    }

    let resp = req.send().await.map_err(|e| {
        SmError::Listing(format!(
            "S3 list objects failed for bucket '{bucket}': {}",
            DisplayErrorContext(&e)
        ))
    })?;

    let objects = resp
        .contents()
        .iter()
        .filter_map(|obj| {
            let key = obj.key().unwrap_or_default();
            if key.is_empty() || key.ends_with('/') {
                return None;
            }
            Some(S3Object {
                key: key.to_string(),
                size: obj.size().and_then(|s| u64::try_from(s).ok()).unwrap_or(0),
            })
        })
        .collect();

    Ok(ListingPage {
        objects,
        truncated: resp.is_truncated() == Some(true),
    })
}

/// A [`ManifestSource`] backed by one S3 bucket listing.
#[derive(Debug, Clone)]
pub struct S3Source {
    client: Client,
    bucket: String,
    prefix: Option<String>,
}

impl S3Source {
    /// Create a source for the bucket and prefix in `config`.
    pub fn new(client: Client, config: &S3Config) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            prefix: config.prefix.clone(),
        }
    }
}

#[async_trait]
impl ManifestSource for S3Source {
    async fn list_keys(&self) -> Result<Vec<String>> {
        let page = list_objects(&self.client, &self.bucket, self.prefix.as_deref()).await?;

        if page.truncated {
            warn!(
                bucket = %self.bucket,
                returned = page.objects.len(),
                "Listing truncated; only the first page is considered"
            );
        }

        debug!(
            bucket = %self.bucket,
            objects = page.objects.len(),
            bytes = page.total_bytes(),
            "Listed bucket"
        );
        Ok(page.into_keys())
    }

    fn describe(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("s3://{}/{}", self.bucket, prefix),
            None => format!("s3://{}", self.bucket),
        }
    }
}
