//! Record quoting dialects and RFC 1464 key/value splitting.
//!
//! Three independent grammars live here:
//! - `dns_txt`: the escaped presentation form of TXT character-strings
//!   (`\\`, `\"`, `\DDD`)
//! - `quoted`: C-style double-quoted string literals, used for file lines
//! - `split`: backtick-escaped `key=value` records (RFC 1464)
//!
//! They are deliberately not unified; each takes and returns plain strings.

mod dns_txt;
mod quoted;
mod split;

// Re-export public API
pub use dns_txt::{quote_dns_txt, unquote_dns_txt};
pub use quoted::unquote_record;
pub use split::{split_record, KeyValueRecord};
