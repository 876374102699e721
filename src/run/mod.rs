//! The lookup pipeline: dispatch, fetch, lookup and output.

use std::io::Write;

use log::debug;

use crate::config::{Config, ValueType};
use crate::error_handling::{Result, SdgetError};
use crate::lookup::lookup_values;
use crate::output::write_values;
use crate::provider::resolve_provider;

/// Resolves the configured source and returns the values for the key.
///
/// # Errors
///
/// Returns `SdgetError::UsageError` if more than one default is given for
/// a single-valued lookup, and otherwise whatever error the provider,
/// fetch or lookup stage raises. Use [`SdgetError::stage`] to tell them
/// apart.
pub async fn lookup(config: &Config) -> Result<Vec<String>> {
    if config.value_type == ValueType::Single && config.defaults.len() > 1 {
        return Err(SdgetError::UsageError(format!(
            "got {} default values, but the value type is \"single\" (did you mean to set --type list?)",
            config.defaults.len()
        )));
    }

    let provider = resolve_provider(&config.source, &config.nameserver)?;
    debug!("Fetching {provider}");
    let records = provider.fetch().await?;
    debug!("Fetched {} records", records.len());

    lookup_values(&records, &config.key, &config.defaults, config.value_type)
}

/// Runs a full lookup and writes the values to `sink`.
///
/// # Errors
///
/// As [`lookup`], plus `SdgetError::OutputError` if writing fails.
pub async fn run<W: Write>(config: &Config, sink: &mut W) -> Result<()> {
    let values = lookup(config).await?;
    write_values(config.format, config.value_type, sink, &values)
}
