//! Review data structures.

use serde::{Deserialize, Serialize};

/// Maximum number of reviews carried into a rendered fragment.
pub const MAX_REVIEWS: usize = 10;

/// A single customer review.
///
/// All string fields are user-supplied and must be escaped before being
/// embedded in markup. `created_at` is an opaque ISO-8601 string and is
/// never parsed or reformatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Opaque unique identifier
    pub id: String,

    /// Reviewer display name
    pub author: String,

    /// Numeric score, rendered with one decimal place
    pub rating: f64,

    /// Free-text review body
    pub comment: String,

    /// Timestamp as received from upstream
    pub created_at: String,
}

/// Wire shape of the upstream reviews endpoint.
///
/// A missing `reviews` field deserializes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Canonical normalized payload for one product.
///
/// Transient value object: built fresh per fetch, consumed immediately by
/// the renderer, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReviews {
    /// Product identifier, matching the identifier used to request it
    pub id: String,

    /// Human-readable product name
    pub name: String,

    /// Reviews in upstream order, truncated to the first [`MAX_REVIEWS`]
    pub reviews: Vec<Review>,
}

impl ProductReviews {
    /// Normalize an upstream response, truncating to the first
    /// [`MAX_REVIEWS`] reviews without reordering.
    pub fn from_api(response: ReviewsResponse) -> Self {
        let mut reviews = response.reviews;
        reviews.truncate(MAX_REVIEWS);
        Self {
            id: response.product_id,
            name: response.product_name,
            reviews,
        }
    }
}
