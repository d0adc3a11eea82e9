//! AWS S3 storage implementation.
//!
//! Fragments are written as publicly-served objects with an HTML content
//! type and a short cache lifetime, one object per product.

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use chrono::Utc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::storage::{FRAGMENT_CACHE_CONTROL, FRAGMENT_CONTENT_TYPE, FragmentStore, StoreReceipt};

/// S3-based fragment storage.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Create a new S3 store with an injected client and bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create S3 storage from environment configuration.
    pub async fn from_env() -> Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        let bucket =
            std::env::var("FRAGMENTS_BUCKET").unwrap_or_else(|_| "reviews-fragments".to_string());

        Ok(Self::new(client, bucket))
    }

    /// Bucket this store writes into.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait::async_trait]
impl FragmentStore for S3Store {
    async fn put_fragment(&self, key: &str, html: &str) -> Result<StoreReceipt> {
        let body = ByteStream::from(html.as_bytes().to_vec());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(FRAGMENT_CONTENT_TYPE)
            .cache_control(FRAGMENT_CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| AppError::storage(e.to_string()))?;

        info!("Wrote fragment to s3://{}/{}", self.bucket, key);

        Ok(StoreReceipt {
            location: format!("s3://{}/{}", self.bucket, key),
            timestamp: Utc::now(),
        })
    }
}
