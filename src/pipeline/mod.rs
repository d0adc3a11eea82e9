// src/pipeline/mod.rs

//! Refresh pipeline: fetch, render, store, one product at a time.
//!
//! Products are processed strictly sequentially in configured order. The
//! first failure at any stage aborts the remaining work; per-product results
//! from earlier iterations are not reported on failure.

use serde::Serialize;

use crate::error::Result;
use crate::render::render;
use crate::services::ReviewSource;
use crate::storage::FragmentStore;

/// Result entry for one successfully stored fragment.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedFragment {
    /// Product the fragment was rendered for
    pub product_id: String,

    /// Object key the fragment was written to
    pub key: String,

    /// Always `"saved"`
    pub status: String,
}

/// Aggregate result of a full refresh run.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    /// Per-product entries, in processing order
    pub saved: Vec<SavedFragment>,

    /// Number of fragments stored
    pub count: usize,
}

/// Object key for a product's stored fragment.
pub fn fragment_key(product_id: &str) -> String {
    format!("reviews/{product_id}.html")
}

/// Run the refresh pipeline over the given product identifiers.
///
/// Fail-fast: the first fetch, render, or store failure aborts the run and
/// surfaces that error; nothing is retried.
pub async fn run_refresh<S, F>(
    source: &S,
    store: &F,
    product_ids: &[String],
) -> Result<RefreshOutcome>
where
    S: ReviewSource + ?Sized,
    F: FragmentStore + ?Sized,
{
    let mut outcome = RefreshOutcome::default();

    for product_id in product_ids {
        let payload = source.fetch_reviews(product_id).await?;
        let html = render(&payload);

        let key = fragment_key(product_id);
        store.put_fragment(&key, &html).await?;

        log::info!(
            "Stored fragment for {} ({} reviews) at {}",
            product_id,
            payload.reviews.len(),
            key
        );

        outcome.saved.push(SavedFragment {
            product_id: product_id.clone(),
            key,
            status: "saved".to_string(),
        });
    }

    outcome.count = outcome.saved.len();
    Ok(outcome)
}
