// src/lambda/mod.rs

//! AWS Lambda handlers.
//!
//! Two functions share this crate:
//! 1. The refresh handler, cron-triggered, runs the fetch → render → store
//!    pipeline for every configured product.
//! 2. The mock handler, HTTP-triggered, serves the simulated upstream
//!    reviews API.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::mock::{self, MockResponse};
use crate::pipeline::{RefreshOutcome, SavedFragment, run_refresh};
use crate::services::HttpReviewSource;
use crate::storage::S3Store;

/// Refresh invocation payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// Optional override for the configured product list
    #[serde(default)]
    pub products: Option<Vec<String>>,
}

/// Refresh response payload.
///
/// Failures are reported here as data, not as a runtime error: the
/// scheduler gets a machine-readable error result either way.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Whether the whole batch was stored
    pub success: bool,

    /// Per-product entries (empty on failure)
    pub saved: Vec<SavedFragment>,

    /// Number of fragments stored
    pub count: usize,

    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

/// Refresh Lambda handler.
#[instrument(skip(event))]
pub async fn refresh_handler(
    event: LambdaEvent<RefreshRequest>,
) -> std::result::Result<RefreshResponse, LambdaError> {
    let start = std::time::Instant::now();
    let (request, _context) = event.into_parts();

    match run_refresh_pipeline(&request).await {
        Ok(outcome) => {
            info!(
                "Refresh completed: {} fragments stored in {}ms",
                outcome.count,
                start.elapsed().as_millis()
            );
            Ok(RefreshResponse {
                success: true,
                saved: outcome.saved,
                count: outcome.count,
                error: None,
                execution_time_ms: start.elapsed().as_millis() as u64,
            })
        }
        Err(e) => {
            error!("Refresh failed: {}", e);
            Ok(RefreshResponse {
                success: false,
                error: Some(e.to_string()),
                execution_time_ms: start.elapsed().as_millis() as u64,
                ..Default::default()
            })
        }
    }
}

/// Composition root for the refresh pipeline in the Lambda environment.
async fn run_refresh_pipeline(request: &RefreshRequest) -> Result<RefreshOutcome> {
    let mut config = PipelineConfig::from_env();
    if let Some(products) = &request.products {
        config.product_ids = products.clone();
    }
    config.validate()?;

    let source = HttpReviewSource::new(&config)?;
    let store = S3Store::from_env().await?;

    info!(
        "Refreshing {} products into bucket {}",
        config.product_ids.len(),
        store.bucket()
    );

    run_refresh(&source, &store, &config.product_ids).await
}

/// Mock API Lambda handler.
///
/// Accepts whatever event shape the HTTP trigger delivers, normalizes it to
/// a single request path, and answers in the API-Gateway proxy response
/// format.
#[instrument(skip(event))]
pub async fn mock_handler(event: LambdaEvent<Value>) -> std::result::Result<Value, LambdaError> {
    let (payload, _context) = event.into_parts();

    let response = match extract_path(&payload) {
        Some(path) => {
            info!("Mock API request: {}", path);
            mock::route(path)
        }
        None => {
            error!("Mock API request without a path: {:?}", payload);
            MockResponse {
                status: 400,
                content_type: "application/json",
                body: json!({ "error": "missing request path" }).to_string(),
            }
        }
    };

    Ok(json!({
        "statusCode": response.status,
        "headers": { "Content-Type": response.content_type },
        "body": response.body,
    }))
}

/// Pull the request path out of the loosely-typed trigger event.
///
/// HTTP triggers differ on where they put it: REST proxy events use `path`,
/// HTTP API v2 events use `rawPath`, and some put it only under
/// `requestContext.http.path`.
fn extract_path(payload: &Value) -> Option<&str> {
    payload
        .get("path")
        .and_then(Value::as_str)
        .or_else(|| payload.get("rawPath").and_then(Value::as_str))
        .or_else(|| {
            payload
                .pointer("/requestContext/http/path")
                .and_then(Value::as_str)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_defaults() {
        let req: RefreshRequest = serde_json::from_str("{}").unwrap();
        assert!(req.products.is_none());
    }

    #[test]
    fn refresh_request_with_override() {
        let req: RefreshRequest =
            serde_json::from_str(r#"{"products": ["product-a"]}"#).unwrap();
        assert_eq!(req.products, Some(vec!["product-a".to_string()]));
    }

    #[test]
    fn extract_path_prefers_rest_proxy_field() {
        let event = json!({"path": "/a", "rawPath": "/b"});
        assert_eq!(extract_path(&event), Some("/a"));
    }

    #[test]
    fn extract_path_falls_back_to_raw_path() {
        let event = json!({"rawPath": "/products/product-a/reviews"});
        assert_eq!(extract_path(&event), Some("/products/product-a/reviews"));
    }

    #[test]
    fn extract_path_reads_request_context() {
        let event = json!({"requestContext": {"http": {"path": "/"}}});
        assert_eq!(extract_path(&event), Some("/"));
    }

    #[test]
    fn extract_path_missing_everywhere() {
        assert_eq!(extract_path(&json!({"body": "x"})), None);
    }
}
