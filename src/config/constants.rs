//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the tool: DNS
//! defaults, transport limits, and the environment variables the CLI binds.

use std::time::Duration;

/// Port appended to nameserver addresses that do not carry one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Per-transport DNS timeout in seconds.
///
/// Each transport (UDP, then TCP after truncation) gets exactly one attempt
/// bounded by this timeout. There is no retry beyond the truncation fallback.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// [`DNS_TIMEOUT_SECS`] as a `Duration`.
pub const DNS_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);

/// Receive buffer for UDP responses (EDNS-sized; larger answers set TC).
pub const MAX_UDP_MESSAGE_SIZE: usize = 4096;

/// System resolver configuration consulted when no nameserver is given.
pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Hostname accepted in `file:` URIs regardless of the machine's name.
pub const LOCALHOST: &str = "localhost";

/// Environment variable for `--format`.
pub const ENV_FORMAT: &str = "SDGET_FORMAT";
/// Environment variable for `--nameserver`.
pub const ENV_NAMESERVER: &str = "SDGET_NAMESERVER";
/// Environment variable for `--type`.
pub const ENV_TYPE: &str = "SDGET_TYPE";
/// Environment variable for `--log-level`.
pub const ENV_LOG_LEVEL: &str = "SDGET_LOG_LEVEL";
/// Environment variable for `--log-format`.
pub const ENV_LOG_FORMAT: &str = "SDGET_LOG_FORMAT";
