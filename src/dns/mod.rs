//! DNS TXT record retrieval.
//!
//! This module provides:
//! - Nameserver address canonicalization with resolv.conf fallback
//! - A single-attempt UDP exchange with TCP retry on truncation
//! - The `DnsProvider` record source
//!
//! Queries are plain recursive TXT lookups; no DNSSEC validation or caching.

mod exchange;
mod nameserver;
mod provider;

// Re-export public API
pub use exchange::{build_query, exchange};
pub use nameserver::{
    add_default_port, canonical_nameserver, has_port, is_unbracketed_ipv6, read_resolv_conf,
    system_nameserver,
};
pub use provider::DnsProvider;
