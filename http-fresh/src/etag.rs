//! Entity tags.
//!
//! Only weak comparison is supported: two entity tags match when their opaque values are equal,
//! whatever their quoting and weak marker.

use std::{borrow::Cow, convert::Infallible, str::FromStr};

/// The weak validator marker.
const WEAK_PREFIX: &str = "W/";

/// Get the opaque value of an entity tag.
///
/// Surrounding whitespace, a leading `W/` marker and every double quote are stripped, so that
/// `W/"foo"`, `"foo"` and `foo` all yield `foo`.
pub fn opaque_tag(tag: &str) -> Cow<'_, str> {
    let tag = tag.trim();
    let tag = tag.strip_prefix(WEAK_PREFIX).map_or(tag, str::trim_start);

    if tag.contains('"') {
        Cow::Owned(tag.replace('"', "").trim().to_owned())
    } else {
        Cow::Borrowed(tag)
    }
}

/// The parsed value of an `If-None-Match` request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityTagList {
    /// The header value was exactly `*`: any current representation matches.
    Any,

    /// The opaque values of the listed entity tags, in order.
    Tags(Vec<String>),
}

impl EntityTagList {
    /// Check whether the list is the `*` wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Check whether the given entity tag matches the list, using weak comparison.
    pub fn matches(&self, etag: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Tags(tags) => {
                let etag = opaque_tag(etag);

                tags.iter().any(|tag| *tag == etag)
            }
        }
    }
}

impl FromStr for EntityTagList {
    type Err = Infallible;

    /// Only a value that is exactly `*` is the wildcard: in `*, "bar"` the star is just another
    /// token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "*" {
            Self::Any
        } else {
            Self::Tags(
                s.split(',')
                    .map(|token| opaque_tag(token).into_owned())
                    .collect(),
            )
        })
    }
}

impl From<&str> for EntityTagList {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(list) => list,
            Err(never) => match never {},
        }
    }
}
