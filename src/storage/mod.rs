// src/storage/mod.rs

//! Storage abstractions for rendered fragments.
//!
//! Fragments are immutable, unconditionally-overwritten objects: one HTML
//! file per product, served to the edge composer straight from the store.

pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStore;
#[cfg(feature = "s3")]
pub use s3::S3Store;

/// Content type set on every stored fragment.
pub const FRAGMENT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Cache lifetime hint set on every stored fragment.
///
/// Short on purpose: the edge composer re-reads fragments on this cadence.
pub const FRAGMENT_CACHE_CONTROL: &str = "max-age=60";

/// Receipt for a completed fragment write.
#[derive(Debug, Clone)]
pub struct StoreReceipt {
    /// Where the fragment ended up (URI or filesystem path)
    pub location: String,

    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for fragment storage backends.
#[async_trait]
pub trait FragmentStore: Send + Sync {
    /// Write `html` as the object body at `key`, creating or overwriting
    /// unconditionally. Errors propagate unmodified; no retry.
    async fn put_fragment(&self, key: &str, html: &str) -> Result<StoreReceipt>;
}
