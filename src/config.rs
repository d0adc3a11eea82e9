// src/config.rs

//! Pipeline configuration.
//!
//! All settings come from environment variables with inline defaults,
//! resolved once at the composition root and passed down explicitly.

use url::Url;

use crate::error::{AppError, Result};

/// Runtime configuration for the refresh pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Base URL of the upstream reviews API
    pub api_base_url: String,

    /// Product identifiers to refresh, in order
    pub product_ids: Vec<String>,

    /// Destination bucket for rendered fragments
    pub bucket: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header for upstream requests
    pub user_agent: String,
}

impl PipelineConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `REVIEWS_API_URL`: upstream reviews API base URL
    /// - `PRODUCT_IDS`: comma-separated product identifiers
    /// - `FRAGMENTS_BUCKET`: destination bucket name
    /// - `FETCH_TIMEOUT_SECS`: HTTP request timeout
    /// - `HTTP_USER_AGENT`: User-Agent for upstream requests
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("REVIEWS_API_URL").unwrap_or_else(|_| defaults::api_base_url());

        let product_ids = std::env::var("PRODUCT_IDS")
            .map(|raw| parse_product_ids(&raw))
            .unwrap_or_else(|_| defaults::product_ids());

        let bucket = std::env::var("FRAGMENTS_BUCKET").unwrap_or_else(|_| defaults::bucket());

        let timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(defaults::timeout);

        let user_agent =
            std::env::var("HTTP_USER_AGENT").unwrap_or_else(|_| defaults::user_agent());

        Self {
            api_base_url,
            product_ids,
            bucket,
            timeout_secs,
            user_agent,
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api_base_url)
            .map_err(|e| AppError::config(format!("invalid api_base_url: {e}")))?;
        if self.product_ids.is_empty() {
            return Err(AppError::config("no product identifiers configured"));
        }
        if self.bucket.trim().is_empty() {
            return Err(AppError::config("bucket name is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config("timeout_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            product_ids: defaults::product_ids(),
            bucket: defaults::bucket(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Split a comma-separated identifier list, dropping empty entries.
///
/// Order is preserved and duplicates are kept.
pub fn parse_product_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

mod defaults {
    pub fn api_base_url() -> String {
        "http://localhost:3001".into()
    }
    pub fn product_ids() -> Vec<String> {
        vec!["product-a".into(), "product-b".into()]
    }
    pub fn bucket() -> String {
        "reviews-fragments".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn user_agent() -> String {
        "fragmenter/0.1".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_product_list() {
        let mut config = PipelineConfig::default();
        config.product_ids.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = PipelineConfig::default();
        config.api_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_product_ids_splits_and_trims() {
        assert_eq!(
            parse_product_ids("product-a, product-b ,product-c"),
            vec!["product-a", "product-b", "product-c"]
        );
    }

    #[test]
    fn parse_product_ids_keeps_duplicates_and_order() {
        assert_eq!(
            parse_product_ids("b,a,b"),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn parse_product_ids_drops_empty_entries() {
        assert_eq!(parse_product_ids("a,,b,"), vec!["a", "b"]);
        assert!(parse_product_ids("").is_empty());
    }
}
