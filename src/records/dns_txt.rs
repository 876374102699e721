//! Presentation-form escaping of TXT record data.
//!
//! TXT character-strings are arbitrary bytes. In presentation form they are
//! rendered with `"` and `\` backslash-escaped and every byte below 32 or
//! above 127 written as a three-digit decimal escape (`\DDD`). Printable
//! ASCII, DEL included, is never escaped numerically.

use std::fmt::Write;

use crate::error_handling::{Result, SdgetError};

/// Renders raw TXT data in escaped presentation form.
pub fn quote_dns_txt(data: &[u8]) -> String {
    let mut quoted = String::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'\\' => quoted.push_str("\\\\"),
            b'"' => quoted.push_str("\\\""),
            b if !(32..=127).contains(&b) => {
                // Writing to a String cannot fail
                let _ = write!(quoted, "\\{b:03}");
            }
            b => quoted.push(char::from(b)),
        }
    }
    quoted
}

/// Reverses [`quote_dns_txt`].
///
/// # Errors
///
/// Returns `SdgetError::DecodeError` for a trailing backslash, an escape that
/// is neither `\\`, `\"` nor three decimal digits, a numeric escape of a
/// printable byte (32..=127) or above 255, or a result that is not UTF-8.
/// The encoder never produces any of these, so they indicate that the
/// escaping scheme changed upstream.
pub fn unquote_dns_txt(quoted: &str) -> Result<String> {
    let bytes = quoted.as_bytes();
    let mut unquoted = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            unquoted.push(bytes[i]);
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            None => {
                return Err(SdgetError::decode(quoted, "trailing backslash"));
            }
            Some(&escaped @ (b'\\' | b'"')) => {
                unquoted.push(escaped);
                i += 2;
            }
            Some(_) => {
                let digits = bytes
                    .get(i + 1..i + 4)
                    .filter(|digits| digits.iter().all(u8::is_ascii_digit))
                    .ok_or_else(|| {
                        let sequence: String = quoted[i..].chars().take(2).collect();
                        SdgetError::decode(quoted, format!("invalid escape sequence: {sequence}"))
                    })?;
                let value = digits
                    .iter()
                    .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
                let byte = u8::try_from(value)
                    .ok()
                    .filter(|b| !(32..=127).contains(b))
                    .ok_or_else(|| {
                        SdgetError::decode(
                            quoted,
                            format!("escaped byte value out of range: \\{value:03}"),
                        )
                    })?;
                unquoted.push(byte);
                i += 4;
            }
        }
    }
    String::from_utf8(unquoted)
        .map_err(|e| SdgetError::decode(quoted, format!("record is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_dns_txt_valid() {
        for (input, expected) in [
            ("", ""),
            ("foo", "foo"),
            (r"\\", r"\"),
            (r#"\"foo\" \"bar\""#, r#""foo" "bar""#),
            (r"tab\009spaced", "tab\tspaced"),
            (r"9999\0099999", "9999\t9999"),
            (r"I \226\153\161 unicode", "I \u{2661} unicode"),
            ("already \u{2661} utf8", "already \u{2661} utf8"),
        ] {
            assert_eq!(unquote_dns_txt(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_unquote_dns_txt_invalid() {
        for input in [r"\?", r"\", r"\999", r#"\"\"#, r"\\\", r"\065", r"\127", r"\12", r"\1a2"] {
            let result = unquote_dns_txt(input);
            assert!(
                matches!(result, Err(SdgetError::DecodeError { .. })),
                "{input:?} should fail, got {result:?}"
            );
        }
    }

    #[test]
    fn test_unquote_dns_txt_escape_range_boundaries() {
        assert_eq!(unquote_dns_txt(r"\031").unwrap(), "\u{1f}");
        assert_eq!(unquote_dns_txt(r"\194\128").unwrap(), "\u{80}");
        for input in [r"\032", r"\127"] {
            assert!(
                matches!(unquote_dns_txt(input), Err(SdgetError::DecodeError { .. })),
                "{input:?} should fail"
            );
        }
        assert_eq!(unquote_dns_txt(r#"a\"b\\c"#).unwrap(), r#"a"b\c"#);
    }

    #[test]
    fn test_unquote_dns_txt_error_names_record() {
        let err = unquote_dns_txt(r"key=\?").unwrap_err();
        assert!(err.to_string().contains(r"key=\?"), "{err}");
    }

    #[test]
    fn test_quote_dns_txt_escapes() {
        assert_eq!(quote_dns_txt(b"plain"), "plain");
        assert_eq!(quote_dns_txt(b"a\"b\\c"), r#"a\"b\\c"#);
        assert_eq!(quote_dns_txt(b"tab\there"), r"tab\009here");
        assert_eq!(quote_dns_txt(&[0x7f, 0x80, 0xff]), "\u{7f}\\128\\255");
    }

    #[test]
    fn test_quote_then_unquote_restores_text() {
        for text in [
            "",
            "version=1.2.3",
            "with \"quotes\" and \\backslashes\\",
            "control\u{1}\u{1f}\r\n\tchars",
            "unicode \u{2661} \u{1F980} text",
            "\\009 literal digits after backslash",
        ] {
            let quoted = quote_dns_txt(text.as_bytes());
            assert_eq!(unquote_dns_txt(&quoted).unwrap(), text, "quoted form {quoted:?}");
        }
    }
}
