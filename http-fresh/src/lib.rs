//! HTTP-Fresh
//!
//! Freshness checks for HTTP conditional requests.
//!
//! Given the headers of a request and the headers of the response that would be sent for it,
//! [`is_fresh`] tells whether the client's cached copy is still valid, in which case the server
//! may answer with `304 Not Modified` instead of the full body.
//!
//! The check honours `If-None-Match` (weak entity-tag comparison), `If-Modified-Since` and the
//! `no-cache` directive of the request `Cache-Control` header. It holds no state and never fails:
//! any missing or malformed value makes the response stale.
//!
//! ```
//! use http::header::{ETAG, IF_NONE_MATCH};
//!
//! let request = http::Request::builder()
//!     .header(IF_NONE_MATCH, "W/\"v1\"")
//!     .body(())
//!     .unwrap();
//! let response = http::Response::builder()
//!     .header(ETAG, "\"v1\"")
//!     .body(())
//!     .unwrap();
//!
//! assert!(http_fresh::is_fresh(&request, &response));
//! ```
//!
//! # Features
//!
//! - `rfc3339`: Also accept RFC 3339 and RFC 2822 timestamps in `If-Modified-Since` and
//!   `Last-Modified`, on top of HTTP-dates. **Enabled by default.**
//! - `examples`: Dependencies of the demo programs. **Not enabled by default.**

pub mod cache_control;
pub mod date;
pub mod etag;

mod freshness;
mod headers;

pub use freshness::{evaluate, Freshness, StaleReason};
pub use headers::HeaderLookup;

/// Check whether a response is fresh for a request.
///
/// This is a shorthand for `evaluate(request, response).is_fresh()`.
pub fn is_fresh<Req, Res>(request: &Req, response: &Res) -> bool
where
    Req: HeaderLookup + ?Sized,
    Res: HeaderLookup + ?Sized,
{
    evaluate(request, response).is_fresh()
}

/// An extension trait for request headers that adds freshness checks.
pub trait FreshnessExt: HeaderLookup {
    /// Evaluate the freshness of a response for these request headers.
    fn freshness<Res: HeaderLookup + ?Sized>(&self, response: &Res) -> Freshness;

    /// Check whether a response is fresh for these request headers.
    fn is_fresh<Res: HeaderLookup + ?Sized>(&self, response: &Res) -> bool {
        self.freshness(response).is_fresh()
    }
}

impl<T: HeaderLookup + ?Sized> FreshnessExt for T {
    fn freshness<Res: HeaderLookup + ?Sized>(&self, response: &Res) -> Freshness {
        evaluate(self, response)
    }
}
