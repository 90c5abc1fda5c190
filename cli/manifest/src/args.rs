//! CLI argument definitions for s3-manifest.

use clap::{Parser, ValueEnum};
use sm_manifest::Selection;

/// Pick manifests from an S3 bucket.
///
/// Lists the bucket, keeps keys ending in `.yml` or `.yaml`, orders them
/// newest first (descending by key) and prints the selected entries to
/// stdout, one per line.
///
/// ## Examples
///
/// Newest manifest:
///   s3-manifest -b my-bucket
///
/// Third newest, using a specific credentials file and profile:
///   s3-manifest -b my-bucket -n 3 -f ~/work/credentials --profile ops
///
/// Every manifest under a prefix:
///   s3-manifest -b my-bucket -p deploy/ --all
#[derive(Parser, Debug)]
#[command(name = "s3-manifest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Selection ===
    /// Print all manifests
    #[arg(short, long, env = "SM_ALL")]
    pub all: bool,

    /// Print the N-th newest manifest (1 = newest)
    #[arg(
        short,
        long,
        env = "SM_NUM",
        default_value = "1",
        allow_negative_numbers = true
    )]
    pub num: i64,

    /// Print the oldest manifest
    #[arg(long, env = "SM_OLDEST")]
    pub oldest: bool,

    /// Glob pattern overriding the default manifest patterns (repeatable)
    #[arg(long = "pattern", env = "SM_PATTERN")]
    pub patterns: Vec<String>,

    // === S3 Configuration ===
    /// S3 bucket name
    #[arg(short, long, env = "SM_S3_BUCKET")]
    pub bucket: String,

    /// S3 prefix to restrict the listing
    #[arg(short, long, env = "SM_S3_PREFIX")]
    pub prefix: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = sm_manifest::s3::DEFAULT_REGION)]
    pub region: String,

    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "SM_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Credentials file (default ~/.aws/credentials, then ~/.aws/config)
    #[arg(short, long, env = "SM_CREDENTIALS_FILE")]
    pub file: Option<String>,

    /// Profile to read from the credentials file
    #[arg(long, env = "AWS_PROFILE", default_value = sm_manifest::credentials::DEFAULT_PROFILE)]
    pub profile: String,

    // === Output Options ===
    /// Output format
    #[arg(long, value_enum, env = "SM_OUTPUT_FORMAT", default_value = "plain")]
    pub output_format: OutputFormatArg,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, env = "SM_LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    /// The selection requested by the flags.
    pub fn selection(&self) -> Selection {
        Selection::from_flags(self.all, self.oldest, self.num)
    }
}

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// One key per line
    Plain,
    /// JSON Lines (one JSON object per line)
    Jsonl,
}

impl From<OutputFormatArg> for sm_manifest::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => sm_manifest::OutputFormat::Plain,
            OutputFormatArg::Jsonl => sm_manifest::OutputFormat::Jsonl,
        }
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
