//! Output formatting for looked-up values.

use std::io::Write;

use crate::config::{OutputFormat, ValueType};
use crate::error_handling::{Result, SdgetError};

fn output_error(e: impl std::fmt::Display) -> SdgetError {
    SdgetError::OutputError(format!("error writing output: {e}"))
}

/// Writes `values` to `sink` in the requested format.
///
/// - `Plain`: each value followed by a newline
/// - `Json`: a JSON string (single) or array (list), then a newline
/// - `Zero`: each value followed by a NUL byte
///
/// # Errors
///
/// Returns `SdgetError::OutputError` if `value_type` is `Single` and there is
/// not exactly one value, or if writing to `sink` fails.
pub fn write_values<W: Write>(
    format: OutputFormat,
    value_type: ValueType,
    sink: &mut W,
    values: &[String],
) -> Result<()> {
    if value_type == ValueType::Single && values.len() != 1 {
        return Err(SdgetError::OutputError(format!(
            "expected 1 value but got {} ({values:?})",
            values.len()
        )));
    }

    match format {
        OutputFormat::Plain => {
            for value in values {
                writeln!(sink, "{value}").map_err(output_error)?;
            }
        }
        OutputFormat::Json => {
            match value_type {
                ValueType::Single => serde_json::to_writer(&mut *sink, &values[0]),
                ValueType::List => serde_json::to_writer(&mut *sink, values),
            }
            .map_err(|e| SdgetError::OutputError(format!("error writing JSON: {e}")))?;
            writeln!(sink).map_err(output_error)?;
        }
        OutputFormat::Zero => {
            for value in values {
                sink.write_all(value.as_bytes()).map_err(output_error)?;
                sink.write_all(b"\0").map_err(output_error)?;
            }
        }
    }
    sink.flush().map_err(output_error)
}
