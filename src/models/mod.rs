// src/models/mod.rs

//! Data structures for the fragment pipeline.

pub mod review;

pub use review::{MAX_REVIEWS, ProductReviews, Review, ReviewsResponse};
