//! Main execution logic for the s3-manifest CLI.

use anyhow::Result;
use sm_error::SmError;
use sm_manifest::{
    QueryConfig, RankedManifest, S3Config, S3Source, create_s3_client, resolve_credentials,
    run_query,
};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Install the global fmt subscriber at `--log-level`.
///
/// Events go to stderr. Stdout carries only the selected keys, so
/// `$(s3-manifest -b bucket)` captures nothing but the manifest name.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Message and exit code for a failed run.
///
/// Out-of-range keeps its bare `Out of range (N items)` line; everything
/// else is prefixed with `Error:` and shows the full context chain.
pub fn report_error(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<SmError>() {
        Some(e @ SmError::OutOfRange { .. }) => (e.to_string(), 1),
        _ => (format!("Error: {err:#}"), 1),
    }
}

/// Exit code for an argument parsing failure.
///
/// `--help` and `--version` succeed. Any other parse error exits with 1.
pub fn parse_error_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Build the S3 configuration from CLI arguments.
pub fn s3_config(args: &Cli) -> Result<S3Config> {
    let credentials = resolve_credentials(args.file.as_deref(), &args.profile)?;

    let mut s3_config = S3Config::new(&args.bucket)
        .with_region(&args.region)
        .with_credentials(credentials);

    if let Some(prefix) = &args.prefix {
        s3_config = s3_config.with_prefix(prefix);
    }

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    Ok(s3_config)
}

/// Build the query configuration from CLI arguments.
pub fn query_config(args: &Cli) -> QueryConfig {
    QueryConfig::new()
        .with_selection(args.selection())
        .with_output_format(args.output_format.into())
        .with_patterns(args.patterns.iter().cloned())
}

/// Execute the query with the provided arguments.
pub async fn execute(args: &Cli) -> Result<Vec<RankedManifest>> {
    let s3_config = s3_config(args)?;
    let client = create_s3_client(&s3_config).await?;
    let source = S3Source::new(client, &s3_config);

    let manifests = run_query(&source, &query_config(args)).await?;
    Ok(manifests)
}
