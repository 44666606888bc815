//! HTTP dates.

use std::{fmt::Display, time::SystemTime};

/// The header a date value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateHeader {
    /// The `If-Modified-Since` request header.
    IfModifiedSince,

    /// The `Last-Modified` response header.
    LastModified,
}

impl Display for DateHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IfModifiedSince => write!(f, "If-Modified-Since"),
            Self::LastModified => write!(f, "Last-Modified"),
        }
    }
}

/// A date header value that could not be converted to an instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{header} value `{value}` is not a valid date")]
pub struct InvalidHttpDate {
    /// The header the value was read from.
    pub header: DateHeader,

    /// The value that was attempted to be parsed.
    pub value: String,
}

/// Parse a date header value into an instant.
///
/// HTTP-dates (IMF-fixdate, RFC 850 and asctime) are always accepted. With the `rfc3339` feature,
/// RFC 3339 and RFC 2822 timestamps are accepted as well.
pub fn parse_http_date(header: DateHeader, value: &str) -> Result<SystemTime, InvalidHttpDate> {
    let trimmed = value.trim();

    httpdate::parse_http_date(trimmed)
        .ok()
        .or_else(|| parse_timestamp(trimmed))
        .ok_or_else(|| InvalidHttpDate {
            header,
            value: value.to_owned(),
        })
}

#[cfg(feature = "rfc3339")]
fn parse_timestamp(value: &str) -> Option<SystemTime> {
    chrono::DateTime::parse_from_rfc3339(value)
        .or_else(|_| chrono::DateTime::parse_from_rfc2822(value))
        .ok()
        .map(SystemTime::from)
}

#[cfg(not(feature = "rfc3339"))]
fn parse_timestamp(_value: &str) -> Option<SystemTime> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use insta::assert_snapshot;

    /// 2000-01-01T00:00:00Z.
    const Y2K: u64 = 946_684_800;

    fn y2k_plus(seconds: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(Y2K + seconds)
    }

    #[test]
    fn test_parse_imf_fixdate() {
        assert_eq!(
            parse_http_date(DateHeader::LastModified, "Sat, 01 Jan 2000 01:00:00 GMT"),
            Ok(y2k_plus(3600))
        );
    }

    #[test]
    fn test_parse_obsolete_formats() {
        assert_eq!(
            parse_http_date(DateHeader::LastModified, "Saturday, 01-Jan-00 00:00:00 GMT"),
            Ok(y2k_plus(0))
        );
        assert_eq!(
            parse_http_date(DateHeader::LastModified, "Sat Jan  1 00:00:00 2000"),
            Ok(y2k_plus(0))
        );
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(
            parse_http_date(DateHeader::IfModifiedSince, " Sat, 01 Jan 2000 00:00:00 GMT "),
            Ok(y2k_plus(0))
        );
    }

    #[cfg(feature = "rfc3339")]
    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_http_date(DateHeader::IfModifiedSince, "2000-01-01T01:00:00Z"),
            Ok(y2k_plus(3600))
        );
        assert_eq!(
            parse_http_date(DateHeader::IfModifiedSince, "2000-01-01T02:00:00+01:00"),
            Ok(y2k_plus(3600))
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_http_date(DateHeader::IfModifiedSince, "foo").unwrap_err();

        assert_eq!(err.header, DateHeader::IfModifiedSince);
        assert_eq!(err.value, "foo");
        assert_snapshot!(err.to_string(), @"If-Modified-Since value `foo` is not a valid date");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_http_date(DateHeader::LastModified, "").is_err());
    }
}
