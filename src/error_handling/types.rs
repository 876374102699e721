//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Result alias used across the library.
pub type Result<T, E = SdgetError> = std::result::Result<T, E>;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// URI components that a provider may refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriComponent {
    /// The `?query` part
    Query,
    /// The `#fragment` part
    Fragment,
}

impl std::fmt::Display for UriComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UriComponent::Query => f.write_str("query"),
            UriComponent::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors that can occur while resolving a source and looking up a key.
///
/// Every variant renders as a single line and carries the offending input so
/// the binary can print a precise diagnostic.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SdgetError {
    /// The command-line arguments are inconsistent.
    #[error("{0}")]
    UsageError(String),

    /// The source contains a colon but does not parse as a URI.
    #[error("failed to parse \"{uri}\" as URI: {reason}")]
    MalformedUri {
        /// The source as given
        uri: String,
        /// What failed to parse
        reason: String,
    },

    /// The URI scheme has no provider.
    #[error("unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// The URI carries a component the provider cannot honour.
    #[error("{component} component not supported in URI \"{uri}\"")]
    UnsupportedUriFeature {
        /// The refused component
        component: UriComponent,
        /// The source as given
        uri: String,
    },

    /// A `file:` URI names a host other than this machine.
    #[error("unsupported hostname in file URI: {0}")]
    UnsupportedHost(String),

    /// The system resolver configuration is missing, unreadable or empty.
    #[error("error reading resolver configuration: {0}")]
    ResolverConfigError(String),

    /// The domain to query is empty or not a valid DNS name.
    #[error("invalid domain name \"{0}\"")]
    InvalidDomain(String),

    /// The DNS exchange failed at the transport level (I/O, timeout, bad reply).
    #[error("error executing DNS query against {nameserver}: {reason}")]
    DnsTransportError {
        /// Canonical `host:port` of the nameserver
        nameserver: String,
        /// Underlying failure
        reason: String,
    },

    /// The nameserver answered NXDOMAIN.
    #[error("no TXT records for domain {0}")]
    NoSuchDomain(String),

    /// The nameserver answered with a response code other than success or NXDOMAIN.
    #[error("error from remote DNS server: {code} (rcode {value})")]
    DnsServerError {
        /// Response code name
        code: String,
        /// Numeric response code
        value: u16,
    },

    /// A record could not be unquoted.
    #[error("error unquoting TXT record \"{record}\": {reason}")]
    DecodeError {
        /// The record as received
        record: String,
        /// What failed to decode
        reason: String,
    },

    /// A `file:` source could not be opened or read.
    #[error("error reading file \"{}\" for TXT records: {source}", path.display())]
    FileReadError {
        /// Path of the records file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No value matched the key and no default was supplied.
    #[error("no values found for key {0}, and no default provided")]
    NoValueFound(String),

    /// More than one value matched under single-value arity.
    #[error("{count} values found for key {key}, but only 1 was expected")]
    AmbiguousValue {
        /// Lowercased key
        key: String,
        /// Number of matching values
        count: usize,
    },

    /// Values could not be written to the output sink.
    #[error("{0}")]
    OutputError(String),
}

impl SdgetError {
    pub(crate) fn decode(record: &str, reason: impl Into<String>) -> Self {
        SdgetError::DecodeError {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}
