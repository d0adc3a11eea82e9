// src/services/mod.rs

//! External-facing services.

pub mod reviews;

pub use reviews::{HttpReviewSource, ReviewSource};
