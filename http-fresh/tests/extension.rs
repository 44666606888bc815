//! Freshness checks through the `FreshnessExt` extension trait and the various header adapters.

use std::collections::HashMap;

use http::header::{CACHE_CONTROL, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use http_fresh::{FreshnessExt, StaleReason};

#[test]
fn test_request_parts_against_response() {
    let (parts, _) = http::Request::get("/resource")
        .header(IF_NONE_MATCH, "\"v2\", W/\"v3\"")
        .body(())
        .expect("valid request")
        .into_parts();

    let response = http::Response::builder()
        .header(ETAG, "W/\"v3\"")
        .body("body")
        .expect("valid response");

    assert!(parts.is_fresh(&response));
    assert!(parts.freshness(&response).stale_reason().is_none());
}

#[test]
fn test_request_against_response_parts() {
    let request = http::Request::get("/resource")
        .header(IF_MODIFIED_SINCE, "Sat, 01 Jan 2000 00:00:00 GMT")
        .header(CACHE_CONTROL, "no-cache")
        .body(())
        .expect("valid request");

    let (parts, _) = http::Response::builder()
        .header(LAST_MODIFIED, "Sat, 01 Jan 2000 00:00:00 GMT")
        .body(())
        .expect("valid response")
        .into_parts();

    assert!(!request.is_fresh(&parts));
    assert_eq!(
        request.freshness(&parts).stale_reason(),
        Some(&StaleReason::NoCache)
    );
}

#[test]
fn test_string_map_headers() {
    let request: HashMap<String, String> = [(
        "if-none-match".to_owned(),
        "\"foo\"".to_owned(),
    )]
    .into_iter()
    .collect();

    assert!(request.is_fresh(&[("ETag", "\"foo\"")]));
    assert_eq!(
        request.freshness(&[("ETag", "\"bar\"")]).stale_reason(),
        Some(&StaleReason::EntityTagMismatch)
    );
}

#[test]
fn test_non_ascii_conditional_header_is_not_dropped() {
    let mut request = http::HeaderMap::new();
    request.insert(
        IF_NONE_MATCH,
        http::HeaderValue::from_bytes(b"\"caf\xc3\xa9\"").expect("obs-text is a valid header value"),
    );

    let response: [(&str, &str); 0] = [];

    assert_eq!(
        request.freshness(&response).stale_reason(),
        Some(&StaleReason::MissingEntityTag)
    );
}

#[test]
fn test_evaluation_is_repeatable() {
    let request = [("If-None-Match", "\"foo\"")];
    let response = [("ETag", "\"foo\"")];

    let first = request.freshness(&response);
    let second = request.freshness(&response);

    assert_eq!(first, second);
    assert!(first.is_fresh());
}
