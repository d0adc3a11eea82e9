// src/render/mod.rs

//! HTML fragment rendering.
//!
//! Pure string templating: a [`ProductReviews`] payload in, a self-contained
//! markup fragment out. The fragment is composed into the final page by an
//! edge-side include pointing at its stored object, so it must be valid on
//! its own and must never contain unescaped user-supplied text.

use crate::models::{MAX_REVIEWS, ProductReviews, Review};

/// Escape the five markup-significant characters for safe embedding.
///
/// Substitution order matters: `&` first, so entities produced by the later
/// replacements are not themselves re-escaped within a single pass. Exactly
/// one pass is performed; input that already contains entities is escaped
/// again (`&amp;` becomes `&amp;amp;`).
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a product's reviews into an HTML fragment.
///
/// Deterministic and side-effect free. At most [`MAX_REVIEWS`] reviews are
/// rendered, in payload order; the cutoff here is a no-op when the fetcher
/// already truncated.
pub fn render(payload: &ProductReviews) -> String {
    let product_id = escape_html(&payload.id);
    let name = escape_html(&payload.name);

    let mut html = String::new();
    html.push_str(&format!(
        "<section class=\"product-reviews\" data-product-id=\"{product_id}\" \
         aria-label=\"Reviews for {name}\">\n"
    ));
    html.push_str(&format!("  <h2>{name}</h2>\n"));

    for review in payload.reviews.iter().take(MAX_REVIEWS) {
        html.push_str(&render_review(review));
    }

    html.push_str("</section>\n");
    html
}

/// Render a single review element.
fn render_review(review: &Review) -> String {
    let id = escape_html(&review.id);
    let author = escape_html(&review.author);
    let comment = escape_html(&review.comment);
    let created_at = escape_html(&review.created_at);
    let rating = format_rating(review.rating);

    let mut html = String::new();
    html.push_str(&format!(
        "  <article class=\"review\" data-review-id=\"{id}\">\n"
    ));
    html.push_str(&format!(
        "    <span class=\"review-author\">{author}</span>\n"
    ));
    html.push_str(&format!(
        "    <span class=\"review-rating\">{rating}</span>\n"
    ));
    html.push_str(&format!(
        "    <time class=\"review-date\">{created_at}</time>\n"
    ));
    html.push_str(&format!(
        "    <p class=\"review-comment\">{comment}</p>\n"
    ));
    html.push_str("  </article>\n");
    html
}

/// Format a rating with exactly one fractional digit.
fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}
