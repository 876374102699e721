//! Generic URI parsing.
//!
//! Splits a URI into the five RFC 3986 components without applying any
//! scheme-specific rules; providers decide what each component means.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error_handling::{Result, SdgetError};

// https://tools.ietf.org/html/rfc3986#appendix-B, restricted to a lowercase scheme
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<scheme>[a-z][a-z0-9+.-]*):(?://(?P<authority>[^/?#]*))?(?P<path>[^#?]*)(?P<query>\?[^#]*)?(?P<fragment>#.*)?$",
    )
    .expect("URI pattern is a valid regex")
});

/// The components of a parsed URI.
///
/// Absent components are empty strings. `query` keeps its leading `?` and
/// `fragment` keeps its leading `#`, so an empty query (`dns:x?`) is still
/// distinguishable from a missing one. `path` and `query` are percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    /// Lowercase-leading scheme, without the colon
    pub scheme: String,
    /// Text between `//` and the path, possibly empty
    pub authority: String,
    /// Percent-decoded path
    pub path: String,
    /// Percent-decoded query, with its leading `?`
    pub query: String,
    /// Fragment, with its leading `#`
    pub fragment: String,
}

/// Parses `uri` into its generic components.
///
/// # Errors
///
/// Returns `SdgetError::MalformedUri` if the string does not match the URI
/// grammar, or if the path or query contains an invalid percent-escape.
pub fn parse_uri(uri: &str) -> Result<ParsedUri> {
    let captures = URI_PATTERN
        .captures(uri)
        .ok_or_else(|| SdgetError::MalformedUri {
            uri: uri.to_string(),
            reason: "does not match URI grammar".to_string(),
        })?;
    let component = |name: &str| {
        captures
            .name(name)
            .map_or_else(String::new, |m| m.as_str().to_string())
    };

    let raw_path = component("path");
    let raw_query = component("query");
    let path = percent_unescape(&raw_path, false).map_err(|reason| SdgetError::MalformedUri {
        uri: uri.to_string(),
        reason: format!("failed to unencode path component \"{raw_path}\": {reason}"),
    })?;
    let query = percent_unescape(&raw_query, true).map_err(|reason| SdgetError::MalformedUri {
        uri: uri.to_string(),
        reason: format!("failed to unencode query component \"{raw_query}\": {reason}"),
    })?;

    Ok(ParsedUri {
        scheme: component("scheme"),
        authority: component("authority"),
        path,
        query,
        fragment: component("fragment"),
    })
}

/// Decodes `%XX` escapes, rejecting truncated or non-hex escapes.
///
/// In query components `+` stands for a space, as in form encoding.
fn percent_unescape(component: &str, plus_as_space: bool) -> std::result::Result<String, String> {
    let bytes = component.as_bytes();
    for (i, _) in component.match_indices('%') {
        let valid = bytes.len() > i + 2
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if !valid {
            let end = (i + 3).min(component.len());
            return Err(format!(
                "invalid URL escape \"{}\"",
                component.get(i..end).unwrap_or(&component[i..])
            ));
        }
    }

    let decoded = if plus_as_space {
        percent_decode_str(&component.replace('+', " "))
            .decode_utf8()
            .map(|s| s.into_owned())
    } else {
        percent_decode_str(component)
            .decode_utf8()
            .map(|s| s.into_owned())
    };
    decoded.map_err(|e| format!("decoded bytes are not UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(scheme: &str, authority: &str, path: &str, query: &str, fragment: &str) -> ParsedUri {
        ParsedUri {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    #[test]
    fn test_parse_uri_rejects_non_uris() {
        for input in ["", "nope", "1dns:example.com", "DNS:example.com", "dn s:example.com"] {
            let result = parse_uri(input);
            assert!(
                matches!(result, Err(SdgetError::MalformedUri { .. })),
                "{input:?} should be malformed, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_uri_rfc4501_examples() {
        assert_eq!(
            parse_uri("dns:www.example.org.?clAsS=IN;tYpE=A").unwrap(),
            uri("dns", "", "www.example.org.", "?clAsS=IN;tYpE=A", "")
        );
        assert_eq!(
            parse_uri("dns:www.example.org").unwrap(),
            uri("dns", "", "www.example.org", "", "")
        );
        assert_eq!(
            parse_uri("dns://192.168.1.1/ftp.example.org?type=A").unwrap(),
            uri("dns", "192.168.1.1", "/ftp.example.org", "?type=A", "")
        );
    }

    #[test]
    fn test_parse_uri_percent_decodes_path() {
        assert_eq!(
            parse_uri("dns:world%20wide%20web.example%5c.domain.org?TYPE=TXT").unwrap(),
            uri(
                "dns",
                "",
                "world wide web.example\\.domain.org",
                "?TYPE=TXT",
                ""
            )
        );
    }

    #[test]
    fn test_parse_uri_query_plus_is_space() {
        let parsed = parse_uri("dns:example.com?a+b%2Bc").unwrap();
        assert_eq!(parsed.query, "?a b+c");
    }

    #[test]
    fn test_parse_uri_fragment() {
        assert_eq!(
            parse_uri("file://localhost/tmp/records#section").unwrap(),
            uri("file", "localhost", "/tmp/records", "", "#section")
        );
        assert_eq!(
            parse_uri("file:///tmp/records?#").unwrap(),
            uri("file", "", "/tmp/records", "?", "#")
        );
    }

    #[test]
    fn test_parse_uri_bracketed_ipv6_authority() {
        let parsed = parse_uri("dns://[::1]:1053/example.com").unwrap();
        assert_eq!(parsed.authority, "[::1]:1053");
        assert_eq!(parsed.path, "/example.com");
    }

    #[test]
    fn test_parse_uri_bad_percent_escape() {
        for input in ["dns:example%2", "dns:example%zz.com", "dns:example.com?x=%"] {
            let result = parse_uri(input);
            assert!(
                matches!(result, Err(SdgetError::MalformedUri { .. })),
                "{input:?} should be malformed, got {result:?}"
            );
        }
    }
}
