//! `Cache-Control` request directives.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a `no-cache` directive anchored to a comma or to either end of the value.
static NO_CACHE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|,)\s*no-cache\s*(?:,|$)").expect("Failed to compile no-cache regex")
});

/// Check whether a request `Cache-Control` value carries a `no-cache` directive.
///
/// The directive is matched case-sensitively, so `No-Cache` does not count, and never inside
/// another directive name such as `x-no-cache`.
pub fn has_no_cache(cache_control: &str) -> bool {
    NO_CACHE_DIRECTIVE.is_match(cache_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_alone() {
        assert!(has_no_cache("no-cache"));
        assert!(has_no_cache(" no-cache"));
        assert!(has_no_cache("no-cache "));
    }

    #[test]
    fn test_no_cache_among_directives() {
        assert!(has_no_cache("max-age=0, no-cache"));
        assert!(has_no_cache("no-cache,max-age=0"));
        assert!(has_no_cache("private , no-cache , max-age=0"));
    }

    #[test]
    fn test_no_cache_not_matched_inside_other_directives() {
        assert!(!has_no_cache(""));
        assert!(!has_no_cache("max-age=0"));
        assert!(!has_no_cache("x-no-cache"));
        assert!(!has_no_cache("no-cache-please"));
        assert!(!has_no_cache("no-cache=\"set-cookie\""));
    }

    #[test]
    fn test_no_cache_is_case_sensitive() {
        assert!(!has_no_cache("No-Cache"));
        assert!(!has_no_cache("NO-CACHE"));
    }
}
