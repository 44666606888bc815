//! Header lookup.
//!
//! The freshness check never parses raw HTTP: it only needs to ask a header collection for the
//! value of a header by name. [`HeaderLookup`] is that capability, and it is implemented for the
//! `http` crate types as well as for plain string collections.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// A case-insensitive, read-only view over a collection of HTTP headers.
///
/// An absent header yields `None`, which is distinct from a header that is present with an empty
/// value.
pub trait HeaderLookup {
    /// Get the value of the header with the given name, if present.
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>>;
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        (**self).get_header(name)
    }
}

/// A header sent on several field lines is folded into one comma-separated value.
impl HeaderLookup for HeaderMap {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        let mut values = self
            .get_all(name)
            .into_iter()
            .map(|value| header_value_text(name, value));

        let first = values.next()?;

        Some(values.fold(first, |folded, value| {
            Cow::Owned(format!("{folded}, {value}"))
        }))
    }
}

impl HeaderLookup for http::request::Parts {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.headers.get_header(name)
    }
}

impl HeaderLookup for http::response::Parts {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.headers.get_header(name)
    }
}

impl<B> HeaderLookup for http::Request<B> {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.headers().get_header(name)
    }
}

impl<B> HeaderLookup for http::Response<B> {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.headers().get_header(name)
    }
}

/// When a name appears more than once, the last pair wins.
impl<K: AsRef<str>, V: AsRef<str>> HeaderLookup for [(K, V)] {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.iter()
            .rev()
            .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name.as_str()))
            .map(|(_, value)| Cow::Borrowed(value.as_ref()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> HeaderLookup for [(K, V); N] {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.as_slice().get_header(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderLookup for Vec<(K, V)> {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.as_slice().get_header(name)
    }
}

impl<S: BuildHasher> HeaderLookup for HashMap<String, String, S> {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        // Exact hit first: most callers already use canonical or lowercase names.
        self.get(name.as_str())
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name.as_str()))
                    .map(|(_, value)| value)
            })
            .map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl HeaderLookup for BTreeMap<String, String> {
    fn get_header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.get(name.as_str())
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name.as_str()))
                    .map(|(_, value)| value)
            })
            .map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Header values that are not visible ASCII are still reported as present, so that a malformed
/// conditional header can never turn a conditional request into an unconditional one.
fn header_value_text<'a>(name: &HeaderName, value: &'a HeaderValue) -> Cow<'a, str> {
    match value.to_str() {
        Ok(value) => Cow::Borrowed(value),
        Err(err) => {
            warn!("Header `{name}` is not visible ASCII ({err}): falling back to a lossy conversion");

            String::from_utf8_lossy(value.as_bytes())
        }
    }
}
