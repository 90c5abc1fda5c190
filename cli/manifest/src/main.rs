//! s3-manifest CLI
//!
//! Prints the newest, oldest, N-th or every manifest in an S3 bucket.

use clap::Parser;
use sm_manifest::ManifestWriter;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            std::process::exit(run::parse_error_code(&err));
        }
    };

    // Initialize logging (to stderr, so stdout is clean for results)
    run::init_logging(args.log_level)?;

    let manifests = match run::execute(&args).await {
        Ok(manifests) => manifests,
        Err(err) => {
            let (message, code) = run::report_error(&err);
            eprintln!("{message}");
            std::process::exit(code);
        }
    };

    let stdout = std::io::stdout().lock();
    ManifestWriter::new(stdout, args.output_format.into()).write_all(&manifests)?;

    Ok(())
}
