//! AWS Lambda entry point for the fragment refresh function.
//!
//! Runs on a cron trigger; each invocation refreshes every configured
//! product's fragment. Deploy with `cargo lambda build --release`.
//!
//! ## Environment Variables
//!
//! - `REVIEWS_API_URL`: upstream reviews API base URL
//! - `PRODUCT_IDS`: comma-separated product identifiers
//! - `FRAGMENTS_BUCKET`: destination S3 bucket
//! - `FETCH_TIMEOUT_SECS`: HTTP request timeout
//! - `RUST_LOG`: log level (e.g., `info`, `debug`)

use lambda_runtime::service_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Fragment refresh Lambda starting...");

    lambda_runtime::run(service_fn(fragmenter::lambda::refresh_handler)).await
}
