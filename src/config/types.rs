//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ENV_FORMAT, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_NAMESERVER, ENV_TYPE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How looked-up values are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Plain,
    /// A JSON string (single) or array of strings (list)
    Json,
    /// Each value terminated by a NUL byte
    Zero,
}

/// How many values a lookup may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// Exactly one value is required
    Single,
    /// Any number of values, including none
    List,
}

/// Command-line configuration for a single lookup.
///
/// # Examples
///
/// ```
/// use sdget::Config;
///
/// let config = Config {
///     source: "file:///etc/sdget/records".to_string(),
///     key: "version".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.value_type, sdget::ValueType::Single);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sdget",
    version,
    about = "Look up a service-discovery value from DNS TXT records or a local file"
)]
pub struct Config {
    /// Record source: a domain name, a dns: URI, or a file: URI
    pub source: String,

    /// Key name to look up in the source
    pub key: String,

    /// Default value(s) to use if the key is not found
    #[arg(value_name = "DEFAULT")]
    pub defaults: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Plain, env = ENV_FORMAT)]
    pub format: OutputFormat,

    /// Nameserver address (ns.example.com:53, 127.0.0.1, ::1)
    #[arg(short = '@', long = "nameserver", default_value = "", hide_default_value = true, env = ENV_NAMESERVER)]
    pub nameserver: String,

    /// Data value type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::Single, env = ENV_TYPE)]
    pub value_type: ValueType,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, env = ENV_LOG_LEVEL)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = ENV_LOG_FORMAT)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: String::new(),
            key: String::new(),
            defaults: Vec::new(),
            format: OutputFormat::Plain,
            nameserver: String::new(),
            value_type: ValueType::Single,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_positional_arguments() {
        let config =
            Config::try_parse_from(["sdget", "example.com", "version", "1.0", "2.0"]).unwrap();
        assert_eq!(config.source, "example.com");
        assert_eq!(config.key, "version");
        assert_eq!(config.defaults, vec!["1.0", "2.0"]);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.value_type, ValueType::Single);
        assert_eq!(config.nameserver, "");
    }

    #[test]
    fn test_parse_short_flags() {
        let config = Config::try_parse_from([
            "sdget", "-f", "json", "-t", "list", "-@", "::1", "example.com", "key",
        ])
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.value_type, ValueType::List);
        assert_eq!(config.nameserver, "::1");
    }

    #[test]
    fn test_parse_zero_format() {
        let config =
            Config::try_parse_from(["sdget", "--format", "zero", "example.com", "key"]).unwrap();
        assert_eq!(config.format, OutputFormat::Zero);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Config::try_parse_from(["sdget", "--format", "yaml", "example.com", "key"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_key() {
        let result = Config::try_parse_from(["sdget", "example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.value_type, ValueType::Single);
        assert!(config.defaults.is_empty());
        assert!(config.nameserver.is_empty());
    }
}
