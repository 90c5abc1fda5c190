//! S3 listing integration tests using LocalStack.
//!
//! These tests verify that manifests are found, ordered and selected from
//! a real bucket listing.

use crate::common::LocalStackTestContext;
use sm_manifest::{
    QueryConfig, S3Config, S3Source, Selection, create_s3_client, list_objects, run_query,
};

const KEYS: [&str; 5] = [
    "deploy/2024-01-01.yml",
    "deploy/2024-02-01.yaml",
    "deploy/2024-03-01.yml",
    "deploy/notes.txt",
    "other/2099-01-01.yml",
];

async fn seed(ctx: &LocalStackTestContext, bucket: &str) {
    ctx.create_bucket(bucket).await.unwrap();
    for key in KEYS {
        ctx.put_manifest(bucket, key).await.unwrap();
    }
}

async fn cleanup(ctx: &LocalStackTestContext, bucket: &str) {
    for key in KEYS {
        ctx.delete_object(bucket, key).await.ok();
    }
}

fn s3_config(ctx: &LocalStackTestContext, bucket: &str) -> S3Config {
    S3Config::new(bucket)
        .with_region(&ctx.region)
        .with_endpoint(&ctx.endpoint)
        .with_static_credentials("test", "test")
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_objects_single_page() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "sm-list-bucket";
    seed(&ctx, bucket).await;

    let config = s3_config(&ctx, bucket);
    let client = create_s3_client(&config).await.unwrap();
    let page = list_objects(&client, bucket, Some("deploy/")).await.unwrap();

    assert!(!page.truncated);
    assert_eq!(page.objects.len(), 4);
    assert!(page.objects.iter().all(|o| o.key.starts_with("deploy/")));

    cleanup(&ctx, bucket).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_latest_and_oldest_from_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "sm-select-bucket";
    seed(&ctx, bucket).await;

    let config = s3_config(&ctx, bucket).with_prefix("deploy/");
    let client = create_s3_client(&config).await.unwrap();
    let source = S3Source::new(client, &config);

    let latest = run_query(&source, &QueryConfig::new()).await.unwrap();
    assert_eq!(latest[0].key, "deploy/2024-03-01.yml");

    let oldest = QueryConfig::new().with_selection(Selection::Oldest);
    let oldest = run_query(&source, &oldest).await.unwrap();
    assert_eq!(oldest[0].key, "deploy/2024-01-01.yml");
    assert_eq!(oldest[0].rank, 3);

    let past_end = QueryConfig::new().with_selection(Selection::Nth(4));
    let err = run_query(&source, &past_end).await.unwrap_err();
    assert_eq!(err.available_items(), Some(3));

    cleanup(&ctx, bucket).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_all_without_prefix() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "sm-all-bucket";
    seed(&ctx, bucket).await;

    let config = s3_config(&ctx, bucket);
    let client = create_s3_client(&config).await.unwrap();
    let source = S3Source::new(client, &config);

    let all = QueryConfig::new().with_selection(Selection::All);
    let manifests = run_query(&source, &all).await.unwrap();
    let keys: Vec<&str> = manifests.iter().map(|m| m.key.as_str()).collect();

    assert_eq!(
        keys,
        vec![
            "other/2099-01-01.yml",
            "deploy/2024-03-01.yml",
            "deploy/2024-02-01.yaml",
            "deploy/2024-01-01.yml",
        ]
    );

    cleanup(&ctx, bucket).await;
}
