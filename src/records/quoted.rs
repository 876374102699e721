//! Double-quoted record lines.
//!
//! A record line that starts with `"` is a C-style string literal: the
//! whole line must be one quoted string, with backslash escapes for control
//! characters, quotes, backslashes, and arbitrary bytes or code points.

use std::str::Chars;

use crate::error_handling::{Result, SdgetError};

/// Unquotes a record line.
///
/// Lines that do not begin with `"` are returned unchanged.
///
/// Supported escapes: `\a \b \f \n \r \t \v \\ \"`, `\xHH` and `\ooo` (one
/// byte each), `\uHHHH` and `\UHHHHHHHH` (one code point each).
///
/// # Errors
///
/// Returns `SdgetError::DecodeError` if the literal is unterminated, contains
/// an unescaped quote or a raw newline, uses an unknown or truncated escape,
/// or decodes to bytes that are not UTF-8.
pub fn unquote_record(record: &str) -> Result<String> {
    if !record.starts_with('"') {
        return Ok(record.to_string());
    }
    let inner = record
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| SdgetError::decode(record, "unterminated quoted string"))?;

    let mut unquoted: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(SdgetError::decode(record, "unescaped quote inside quoted string")),
            '\n' => return Err(SdgetError::decode(record, "newline inside quoted string")),
            '\\' => unescape(record, &mut chars, &mut unquoted)?,
            c => push_char(&mut unquoted, c),
        }
    }

    String::from_utf8(unquoted)
        .map_err(|e| SdgetError::decode(record, format!("record is not valid UTF-8: {e}")))
}

fn unescape(record: &str, chars: &mut Chars<'_>, unquoted: &mut Vec<u8>) -> Result<()> {
    let escape = chars
        .next()
        .ok_or_else(|| SdgetError::decode(record, "trailing backslash"))?;
    match escape {
        'a' => unquoted.push(0x07),
        'b' => unquoted.push(0x08),
        'f' => unquoted.push(0x0c),
        'n' => unquoted.push(b'\n'),
        'r' => unquoted.push(b'\r'),
        't' => unquoted.push(b'\t'),
        'v' => unquoted.push(0x0b),
        '\\' => unquoted.push(b'\\'),
        '"' => unquoted.push(b'"'),
        'x' => {
            let value = take_digits(chars, 2, 16)
                .ok_or_else(|| SdgetError::decode(record, "invalid \\x escape"))?;
            unquoted.push(byte(record, value)?);
        }
        '0'..='7' => {
            let rest = take_digits(chars, 2, 8)
                .ok_or_else(|| SdgetError::decode(record, "invalid octal escape"))?;
            let value = escape.to_digit(8).unwrap_or(0) * 64 + rest;
            unquoted.push(byte(record, value)?);
        }
        'u' | 'U' => {
            let width = if escape == 'u' { 4 } else { 8 };
            let c = take_digits(chars, width, 16)
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    SdgetError::decode(record, format!("invalid \\{escape} escape"))
                })?;
            push_char(unquoted, c);
        }
        other => {
            return Err(SdgetError::decode(
                record,
                format!("invalid escape sequence: \\{other}"),
            ))
        }
    }
    Ok(())
}

/// Consumes exactly `count` digits in `radix`, or returns `None`.
fn take_digits(chars: &mut Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| {
        let digit = chars.next()?.to_digit(radix)?;
        Some(acc * radix + digit)
    })
}

fn byte(record: &str, value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        SdgetError::decode(record, format!("escaped byte value out of range: {value}"))
    })
}

fn push_char(buf: &mut Vec<u8>, c: char) {
    let mut encoded = [0u8; 4];
    buf.extend_from_slice(c.encode_utf8(&mut encoded).as_bytes());
}
