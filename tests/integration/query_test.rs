//! End-to-end query tests against in-memory sources.

use crate::common::FailingSource;
use sm_error::SmError;
use sm_manifest::{
    ManifestWriter, OutputFormat, QueryConfig, RankedManifest, Selection, StaticSource, run_query,
};

fn release_source() -> StaticSource {
    StaticSource::new([
        "releases/2024-01-15T0900.yaml",
        "releases/2024-03-02T1130.yml",
        "releases/notes.txt",
        "releases/2023-11-30T2300.yaml",
        "releases/2024-03-02T1130.yml.bak",
        "releases/",
        "README.md",
    ])
}

async fn render(source: &StaticSource, config: &QueryConfig) -> String {
    let manifests = run_query(source, config).await.unwrap();
    let mut writer = ManifestWriter::new(Vec::new(), config.output_format);
    writer.write_all(&manifests).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[tokio::test]
async fn test_latest_release() {
    let out = render(&release_source(), &QueryConfig::new()).await;
    assert_eq!(out, "releases/2024-03-02T1130.yml\n");
}

#[tokio::test]
async fn test_oldest_release() {
    let config = QueryConfig::new().with_selection(Selection::Oldest);
    let out = render(&release_source(), &config).await;
    assert_eq!(out, "releases/2023-11-30T2300.yaml\n");
}

#[tokio::test]
async fn test_all_releases_newest_first() {
    let config = QueryConfig::new().with_selection(Selection::All);
    let out = render(&release_source(), &config).await;

    assert_eq!(
        out,
        "releases/2024-03-02T1130.yml\n\
         releases/2024-01-15T0900.yaml\n\
         releases/2023-11-30T2300.yaml\n"
    );
}

#[tokio::test]
async fn test_nth_release_jsonl() {
    let config = QueryConfig::new()
        .with_selection(Selection::Nth(2))
        .with_output_format(OutputFormat::Jsonl);
    let out = render(&release_source(), &config).await;

    assert_eq!(
        out,
        "{\"rank\":2,\"key\":\"releases/2024-01-15T0900.yaml\"}\n"
    );
}

#[tokio::test]
async fn test_rank_past_end_reports_count() {
    for rank in [0, -1, 4] {
        let config = QueryConfig::new().with_selection(Selection::Nth(rank));
        let err = run_query(&release_source(), &config).await.unwrap_err();

        assert!(
            matches!(err, SmError::OutOfRange { count: 3 }),
            "rank {rank}: {err}"
        );
    }
}

#[tokio::test]
async fn test_bucket_without_manifests() {
    let source = StaticSource::new(["data.json", "image.png"]);

    let all = QueryConfig::new().with_selection(Selection::All);
    assert!(run_query(&source, &all).await.unwrap().is_empty());

    let err = run_query(&source, &QueryConfig::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Out of range (0 items)");
}

#[tokio::test]
async fn test_custom_patterns() {
    let source = StaticSource::new(["a.json", "b.json", "c.yml"]);
    let config = QueryConfig::new()
        .with_selection(Selection::All)
        .with_patterns(["*.json"]);

    let manifests = run_query(&source, &config).await.unwrap();
    assert_eq!(
        manifests,
        vec![RankedManifest::new(1, "b.json"), RankedManifest::new(2, "a.json")]
    );
}

#[tokio::test]
async fn test_listing_error_propagated_unchanged() {
    let source = FailingSource {
        message: "AccessDenied".to_string(),
    };

    let err = run_query(&source, &QueryConfig::new()).await.unwrap_err();
    match err {
        SmError::Listing(message) => assert_eq!(message, "AccessDenied"),
        other => panic!("expected listing error, got {other:?}"),
    }
}
