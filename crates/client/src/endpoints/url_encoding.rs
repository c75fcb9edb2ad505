//! Percent-encoding for caller-supplied URL path segments.
//!
//! Role definition ids and resource names are interpolated into ARM paths.
//! Unencoded, a `/` nests the path, `?` or `#` start a query or fragment,
//! and `..` climbs out of the collection once the URL is parsed.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

use crate::error::RequestError;

/// Characters percent-encoded in a single path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%') // keeps pre-encoded input literal
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use azure_rest_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("a?b"), "a%3Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Encode `value` as a path segment, rejecting values that cannot be one.
///
/// Empty strings, `.` and `..` are dot segments (or no segment at all) even
/// after encoding, since URL parsers also treat `%2e` as a dot.
pub fn require_path_segment(value: &str, what: &str) -> Result<String, RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::InvalidUrl(format!("{} must not be empty", what)));
    }
    if value == "." || value == ".." {
        return Err(RequestError::InvalidUrl(format!(
            "{} '{}' is not a valid path segment",
            what, value
        )));
    }
    Ok(encode_path_segment(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_guid_unchanged() {
        assert_eq!(
            encode_path_segment("7b266cd7-0bba-4ae2-8423-90ede5e1e898"),
            "7b266cd7-0bba-4ae2-8423-90ede5e1e898"
        );
        assert_eq!(encode_path_segment("Microsoft.Storage"), "Microsoft.Storage");
    }

    #[test]
    fn test_encode_slash_and_traversal() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(
            encode_path_segment("../../../resourceGroups/prod-rg"),
            "..%2F..%2F..%2FresourceGroups%2Fprod-rg"
        );
    }

    #[test]
    fn test_encode_query_and_fragment() {
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("a%2Fb"), "a%252Fb");
    }

    #[test]
    fn test_encode_space_and_unicode() {
        assert_eq!(encode_path_segment("my role"), "my%20role");
        assert_eq!(encode_path_segment("r\u{00f4}le"), "r%C3%B4le");
    }

    #[test]
    fn test_require_path_segment_rejects_dot_segments() {
        for value in ["", "   ", ".", ".."] {
            assert!(
                matches!(
                    require_path_segment(value, "role definition id"),
                    Err(RequestError::InvalidUrl(_))
                ),
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_require_path_segment_encodes() {
        assert_eq!(require_path_segment("abc", "id").unwrap(), "abc");
        assert_eq!(require_path_segment("../x", "id").unwrap(), "..%2Fx");
        assert_eq!(require_path_segment("...", "id").unwrap(), "...");
    }
}
