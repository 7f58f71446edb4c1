//! Response header helpers.

use crate::query::page::PageMeta;
use axum::http::{header, HeaderMap, HeaderValue};

pub const X_PAGINATION: &str = "x-pagination";

/// Pagination metadata as JSON in the `X-Pagination` header, so list bodies
/// stay plain payloads.
pub fn pagination_headers(meta: &PageMeta) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let json = serde_json::to_string(meta).unwrap_or_default();
    if let Ok(value) = HeaderValue::from_str(&json) {
        headers.insert(X_PAGINATION, value);
    }
    headers
}

/// `Location` header for 201 responses.
pub fn location_header(path: String) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&path) {
        headers.insert(header::LOCATION, value);
    }
    headers
}
