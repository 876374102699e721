//! sdget library: service-discovery lookups over DNS TXT records
//!
//! Resolves a source (a domain name, a `dns:` URI or a `file:` URI) into a
//! set of RFC 1464 style `key=value` records, then looks up one key.
//!
//! # Example
//!
//! ```no_run
//! use sdget::{lookup, Config, ValueType};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     source: "dns://192.0.2.53/_config.example.com".to_string(),
//!     key: "version".to_string(),
//!     value_type: ValueType::Single,
//!     ..Default::default()
//! };
//!
//! let values = lookup(&config).await?;
//! println!("version = {}", values[0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching is async and requires a Tokio runtime; a single-threaded runtime
//! is enough since a lookup performs one sequential exchange.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod output;
pub mod provider;
pub mod records;
mod run;
pub mod uri;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, ValueType};
pub use error_handling::{FailureStage, InitializationError, Result, SdgetError, UriComponent};
pub use lookup::lookup_values;
pub use output::write_values;
pub use provider::{resolve_provider, DnsProvider, FileProvider, TxtRecordProvider};
pub use run::{lookup, run};
