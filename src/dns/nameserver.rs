//! Nameserver address canonicalization.
//!
//! Users can give a nameserver with or without a port, or not at all. In the
//! last case the system resolver configuration supplies one. The canonical
//! form always carries a port and brackets IPv6 literals:
//!
//! | input                | canonical            |
//! |----------------------|----------------------|
//! | `example.com`        | `example.com:53`     |
//! | `example.com:1053`   | `example.com:1053`   |
//! | `127.0.0.1`          | `127.0.0.1:53`       |
//! | `::1`                | `[::1]:53`           |
//! | `[::1]:1053`         | `[::1]:1053`         |

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::{DEFAULT_DNS_PORT, RESOLV_CONF_PATH};
use crate::error_handling::{Result, SdgetError};

static HAS_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]+|\[.+\]):[0-9]+$").expect("port pattern is a valid regex")
});

static UNBRACKETED_IPV6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F:]*:[0-9a-fA-F:]+$").expect("IPv6 pattern is a valid regex")
});

/// True if `address` ends in an explicit port after a host or a bracketed IPv6 literal.
pub fn has_port(address: &str) -> bool {
    HAS_PORT.is_match(address)
}

/// True if `address` looks like an IPv6 literal written without brackets.
pub fn is_unbracketed_ipv6(address: &str) -> bool {
    UNBRACKETED_IPV6.is_match(address)
}

/// Appends the default DNS port unless `address` already has one.
///
/// The port check runs first: `[::1]:53` has a port, while `::1` does not
/// and is bracketed before the port is added.
pub fn add_default_port(address: &str) -> String {
    if has_port(address) {
        address.to_string()
    } else if is_unbracketed_ipv6(address) {
        format!("[{address}]:{DEFAULT_DNS_PORT}")
    } else {
        format!("{address}:{DEFAULT_DNS_PORT}")
    }
}

/// Returns the canonical `host:port` form of a nameserver.
///
/// An empty `explicit` address falls back to the first nameserver declared
/// in the resolver configuration file at `resolv_conf`.
///
/// # Errors
///
/// Returns `SdgetError::ResolverConfigError` if the fallback is needed and
/// the configuration file cannot be opened, cannot be parsed, or declares
/// no nameservers.
pub fn canonical_nameserver(explicit: &str, resolv_conf: &Path) -> Result<String> {
    if explicit.is_empty() {
        nameserver_from_file(resolv_conf)
    } else {
        Ok(add_default_port(explicit))
    }
}

/// Returns the first nameserver declared in `/etc/resolv.conf`.
///
/// # Errors
///
/// As [`read_resolv_conf`], or `SdgetError::ResolverConfigError` if the file
/// cannot be opened.
pub fn system_nameserver() -> Result<String> {
    nameserver_from_file(Path::new(RESOLV_CONF_PATH))
}

fn nameserver_from_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| {
        SdgetError::ResolverConfigError(format!("error opening {}: {e}", path.display()))
    })?;
    let nameserver = read_resolv_conf(BufReader::new(file))?;
    debug!("Using nameserver {nameserver} from {}", path.display());
    Ok(nameserver)
}

/// Reads the first nameserver from resolv.conf-formatted lines.
///
/// Recognizes `nameserver <address>` and `port <number>` directives; comments
/// (`#`, `;`) and other directives are ignored. The port defaults to 53.
///
/// # Errors
///
/// Returns `SdgetError::ResolverConfigError` on read failures, a malformed
/// directive, or when no nameserver is declared.
pub fn read_resolv_conf<R: BufRead>(reader: R) -> Result<String> {
    let mut servers = Vec::new();
    let mut port = DEFAULT_DNS_PORT;

    for line in reader.lines() {
        let line = line.map_err(|e| {
            SdgetError::ResolverConfigError(format!("error reading resolver configuration: {e}"))
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("nameserver") => {
                let server = fields.next().ok_or_else(|| {
                    SdgetError::ResolverConfigError(format!("nameserver directive without address: \"{line}\""))
                })?;
                servers.push(server.to_string());
            }
            Some("port") => {
                port = fields
                    .next()
                    .and_then(|p| p.parse::<u16>().ok())
                    .ok_or_else(|| {
                        SdgetError::ResolverConfigError(format!("invalid port directive: \"{line}\""))
                    })?;
            }
            _ => {}
        }
    }

    let server = servers.first().ok_or_else(|| {
        SdgetError::ResolverConfigError("no nameservers configured".to_string())
    })?;
    if server.contains(':') {
        Ok(format!("[{server}]:{port}"))
    } else {
        Ok(format!("{server}:{port}"))
    }
}
