//! RFC 1464 style `key=value` splitting.
//!
//! The key runs up to the first unescaped `=`. A backtick escapes the next
//! character, which makes it possible to put `=`, leading whitespace or
//! trailing whitespace into a key. Leading whitespace and unescaped trailing
//! whitespace are not part of the key; the value is taken verbatim.

/// A record split into key and value.
///
/// `is_record` is false for lines without an unescaped `=`; such lines carry
/// an empty key and value and never match a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueRecord {
    /// Whether the line contained an unescaped `=`
    pub is_record: bool,
    /// Lowercased key, for case-insensitive matching
    pub key: String,
    /// Everything after the first unescaped `=`, verbatim
    pub value: String,
}

const ESCAPE: char = '`';

/// Splits `record` at its first unescaped `=`.
pub fn split_record(record: &str) -> KeyValueRecord {
    let record = record.trim_start_matches([' ', '\t']);
    let mut key = String::new();
    let mut escaped = false;
    // Length in bytes of the unescaped whitespace run at the end of `key`
    let mut trailing_whitespace = 0;

    for (i, c) in record.char_indices() {
        if escaped {
            key.push(c);
            trailing_whitespace = 0;
            escaped = false;
            continue;
        }
        match c {
            ESCAPE => escaped = true,
            '=' => {
                key.truncate(key.len() - trailing_whitespace);
                return KeyValueRecord {
                    is_record: true,
                    key: key.to_lowercase(),
                    value: record[i + 1..].to_string(),
                };
            }
            ' ' | '\t' => {
                key.push(c);
                trailing_whitespace += 1;
            }
            c => {
                key.push(c);
                trailing_whitespace = 0;
            }
        }
    }

    KeyValueRecord::default()
}
