// src/mock/fixtures.rs

//! Static review fixtures served by the mock API.

use crate::models::{Review, ReviewsResponse};

/// Product identifiers the mock API knows about.
pub fn known_products() -> Vec<&'static str> {
    vec!["product-a", "product-b"]
}

/// Fixture payload for a product, or `None` if unknown.
pub fn reviews_for(product_id: &str) -> Option<ReviewsResponse> {
    match product_id {
        "product-a" => Some(product_a()),
        "product-b" => Some(product_b()),
        _ => None,
    }
}

fn review(id: &str, author: &str, rating: f64, comment: &str, created_at: &str) -> Review {
    Review {
        id: id.to_string(),
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        created_at: created_at.to_string(),
    }
}

fn product_a() -> ReviewsResponse {
    ReviewsResponse {
        product_id: "product-a".to_string(),
        product_name: "Ergonomic Desk Chair".to_string(),
        reviews: vec![
            review(
                "a-1",
                "Maya R.",
                5.0,
                "Assembled in ten minutes & my back pain is gone.",
                "2024-02-03T14:22:00Z",
            ),
            review(
                "a-2",
                "Jonas",
                4.0,
                "Sturdy build. The armrests could be softer.",
                "2024-02-11T09:05:00Z",
            ),
            review(
                "a-3",
                "P. Okafor",
                3.5,
                "Decent for the price, but the <tilt> lever feels flimsy.",
                "2024-03-01T18:47:00Z",
            ),
        ],
    }
}

fn product_b() -> ReviewsResponse {
    ReviewsResponse {
        product_id: "product-b".to_string(),
        product_name: "Standing Desk \"Uplift\"".to_string(),
        reviews: vec![
            review(
                "b-1",
                "Hannah",
                4.5,
                "Quiet motor, solid at full height.",
                "2024-01-20T11:30:00Z",
            ),
            review(
                "b-2",
                "Luis O'Neill",
                2.0,
                "Arrived with a scratched top. Support was slow.",
                "2024-02-27T16:12:00Z",
            ),
        ],
    }
}
