//! Integration tests for s3-manifest.
//!
//! `query_test` runs against in-memory sources and always runs. The S3 tests
//! require LocalStack and are marked as `#[ignore]`.
//!
//! ## Running the LocalStack tests
//!
//! 1. Start LocalStack:
//!    ```bash
//!    docker run --rm -p 4566:4566 localstack/localstack
//!    ```
//!
//! 2. Run the ignored tests:
//!    ```bash
//!    LOCALSTACK_ENDPOINT=http://localhost:4566 cargo test -p integration-tests -- --ignored
//!    ```

mod common;
mod query_test;
mod s3_test;
