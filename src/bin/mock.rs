//! AWS Lambda entry point for the mock reviews API.
//!
//! HTTP-triggered stand-in for the upstream reviews service, used to test
//! the refresh pipeline end to end without the real dependency.

use lambda_runtime::service_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Mock reviews API Lambda starting...");

    lambda_runtime::run(service_fn(fragmenter::lambda::mock_handler)).await
}
