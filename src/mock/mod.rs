// src/mock/mod.rs

//! Mock upstream reviews API.
//!
//! Simulates the reviews service for testing and local development. The
//! router is a pure function over a request path; the hosting adapter is
//! responsible for normalizing whatever trigger shape it receives into a
//! single path string.

pub mod fixtures;

use serde_json::json;

/// Response from the mock router.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl MockResponse {
    fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }
}

/// Route a request path to a mock response.
///
/// - `/` lists the available endpoints and known products.
/// - `/products/{id}/reviews` returns the fixture payload, or 404 for an
///   unknown product.
/// - Anything else is a 400.
pub fn route(path: &str) -> MockResponse {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => MockResponse::json(
            200,
            json!({
                "endpoints": ["/products/{productId}/reviews"],
                "products": fixtures::known_products(),
            }),
        ),
        ["products", product_id, "reviews"] => match fixtures::reviews_for(product_id) {
            Some(payload) => MockResponse::json(
                200,
                serde_json::to_value(payload).unwrap_or_else(|_| json!({})),
            ),
            None => MockResponse::json(
                404,
                json!({ "error": format!("unknown product: {product_id}") }),
            ),
        },
        _ => MockResponse::json(400, json!({ "error": "bad request" })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewsResponse;

    #[test]
    fn known_product_returns_fixture_payload() {
        let response = route("/products/product-a/reviews");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "application/json");

        let payload: ReviewsResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload.product_id, "product-a");
        assert!(!payload.reviews.is_empty());
    }

    #[test]
    fn unknown_product_is_404() {
        let response = route("/products/unknown/reviews");
        assert_eq!(response.status, 404);
        assert!(response.body.contains("unknown"));
    }

    #[test]
    fn root_lists_endpoints() {
        let response = route("/");
        assert_eq!(response.status, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["endpoints"].is_array());
        assert!(
            body["products"]
                .as_array()
                .unwrap()
                .iter()
                .any(|p| p.as_str() == Some("product-a"))
        );
    }

    #[test]
    fn other_paths_are_400() {
        assert_eq!(route("/products").status, 400);
        assert_eq!(route("/products/product-a").status, 400);
        assert_eq!(route("/reviews/product-a").status, 400);
        assert_eq!(route("/products/product-a/reviews/extra").status, 400);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(route("/products/product-a/reviews/").status, 200);
    }

    #[test]
    fn fixture_parses_into_the_fetcher_wire_shape() {
        for product in fixtures::known_products() {
            let response = route(&format!("/products/{product}/reviews"));
            let payload: ReviewsResponse = serde_json::from_str(&response.body).unwrap();
            assert_eq!(payload.product_id, product);
        }
    }
}
