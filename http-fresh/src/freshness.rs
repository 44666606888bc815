//! The freshness check.

use std::fmt::Display;

use http::header::{CACHE_CONTROL, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use tracing::debug;

use crate::{
    cache_control::has_no_cache,
    date::{parse_http_date, DateHeader, InvalidHttpDate},
    etag::EntityTagList,
    HeaderLookup,
};

/// The verdict of a freshness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// The client's cached representation is still valid and a `304 Not Modified` may be sent.
    Fresh,

    /// The client's cached representation cannot be trusted and the full response must be sent.
    Stale(StaleReason),
}

impl Freshness {
    /// Check whether the verdict is [`Freshness::Fresh`].
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }

    /// Get the reason the representation is stale, if it is.
    pub fn stale_reason(&self) -> Option<&StaleReason> {
        match self {
            Self::Fresh => None,
            Self::Stale(reason) => Some(reason),
        }
    }
}

impl Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Stale(reason) => write!(f, "stale: {reason}"),
        }
    }
}

/// Why a representation was judged stale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StaleReason {
    /// The request carried neither `If-None-Match` nor `If-Modified-Since`.
    Unconditional,

    /// The request carried a `Cache-Control: no-cache` directive.
    NoCache,

    /// The request carried `If-None-Match` but the response has no `ETag`.
    MissingEntityTag,

    /// The response `ETag` is not listed in the request `If-None-Match`.
    EntityTagMismatch,

    /// The request carried `If-Modified-Since` but the response has no `Last-Modified`.
    MissingLastModified,

    /// One of the dates could not be parsed.
    InvalidDate(InvalidHttpDate),

    /// The response `Last-Modified` is later than the request `If-Modified-Since`.
    Modified,
}

impl Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconditional => write!(f, "unconditional request"),
            Self::NoCache => write!(f, "request has Cache-Control: no-cache"),
            Self::MissingEntityTag => write!(f, "response has no ETag"),
            Self::EntityTagMismatch => write!(f, "ETag does not match If-None-Match"),
            Self::MissingLastModified => write!(f, "response has no Last-Modified"),
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::Modified => write!(f, "modified since If-Modified-Since"),
        }
    }
}

impl From<InvalidHttpDate> for StaleReason {
    fn from(err: InvalidHttpDate) -> Self {
        Self::InvalidDate(err)
    }
}

/// Evaluate the freshness of a response for a conditional request.
///
/// The checks run in this order, the first failing one deciding the verdict:
///
/// 1. A request with neither `If-None-Match` nor `If-Modified-Since` is stale.
/// 2. A request with a `Cache-Control: no-cache` directive is stale.
/// 3. If `If-None-Match` is present and is not exactly `*`, the response `ETag` must be present
///    and match one of the listed tags (weak comparison).
/// 4. If `If-Modified-Since` is present, the response `Last-Modified` must be present, both dates
///    must parse and `Last-Modified` must not be later than `If-Modified-Since`.
///
/// Malformed or missing values never raise an error: they make the response stale.
pub fn evaluate<Req, Res>(request: &Req, response: &Res) -> Freshness
where
    Req: HeaderLookup + ?Sized,
    Res: HeaderLookup + ?Sized,
{
    let freshness = match check(request, response) {
        Ok(()) => Freshness::Fresh,
        Err(reason) => Freshness::Stale(reason),
    };

    debug!("Freshness check: {freshness}");

    freshness
}

fn check<Req, Res>(request: &Req, response: &Res) -> Result<(), StaleReason>
where
    Req: HeaderLookup + ?Sized,
    Res: HeaderLookup + ?Sized,
{
    let modified_since = request.get_header(&IF_MODIFIED_SINCE);
    let none_match = request.get_header(&IF_NONE_MATCH);

    if modified_since.is_none() && none_match.is_none() {
        return Err(StaleReason::Unconditional);
    }

    // End-to-end reloads must always revalidate.
    if request
        .get_header(&CACHE_CONTROL)
        .is_some_and(|cache_control| has_no_cache(&cache_control))
    {
        return Err(StaleReason::NoCache);
    }

    if let Some(none_match) = none_match {
        let tags = EntityTagList::from(&*none_match);

        if !tags.is_any() {
            let etag = response
                .get_header(&ETAG)
                .ok_or(StaleReason::MissingEntityTag)?;

            if !tags.matches(&etag) {
                return Err(StaleReason::EntityTagMismatch);
            }
        }
    }

    if let Some(modified_since) = modified_since {
        let last_modified = response
            .get_header(&LAST_MODIFIED)
            .ok_or(StaleReason::MissingLastModified)?;

        let modified_since = parse_http_date(DateHeader::IfModifiedSince, &modified_since)?;
        let last_modified = parse_http_date(DateHeader::LastModified, &last_modified)?;

        if last_modified > modified_since {
            return Err(StaleReason::Modified);
        }
    }

    Ok(())
}
