// src/services/reviews.rs

//! Review fetcher service.
//!
//! Fetches raw review data for a product from the upstream API and
//! normalizes it into the canonical payload.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::PipelineConfig;
use crate::error::{AppError, Result};
use crate::models::{ProductReviews, ReviewsResponse};

/// Source of review payloads, keyed by product identifier.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch and normalize the reviews for one product.
    async fn fetch_reviews(&self, product_id: &str) -> Result<ProductReviews>;
}

/// HTTP-backed review source for the upstream reviews API.
pub struct HttpReviewSource {
    client: Client,
    base_url: String,
}

impl HttpReviewSource {
    /// Create a review source with a configured HTTP client.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the request URL for a product's reviews endpoint.
    fn reviews_url(&self, product_id: &str) -> String {
        format!("{}/products/{}/reviews", self.base_url, product_id)
    }
}

#[async_trait]
impl ReviewSource for HttpReviewSource {
    async fn fetch_reviews(&self, product_id: &str) -> Result<ProductReviews> {
        let url = self.reviews_url(product_id);
        log::debug!("Fetching reviews from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(product_id, status.as_u16()));
        }

        let body: ReviewsResponse = response.json().await?;
        Ok(ProductReviews::from_api(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_base(base: &str) -> HttpReviewSource {
        let config = PipelineConfig {
            api_base_url: base.to_string(),
            ..PipelineConfig::default()
        };
        HttpReviewSource::new(&config).unwrap()
    }

    #[test]
    fn reviews_url_joins_base_and_path() {
        let source = source_with_base("https://api.example.com");
        assert_eq!(
            source.reviews_url("product-a"),
            "https://api.example.com/products/product-a/reviews"
        );
    }

    #[test]
    fn reviews_url_strips_trailing_slash() {
        let source = source_with_base("https://api.example.com/");
        assert_eq!(
            source.reviews_url("product-b"),
            "https://api.example.com/products/product-b/reviews"
        );
    }
}
