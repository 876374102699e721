//! Error categorization by pipeline stage.
//!
//! The binary maps each stage to a distinct exit code so that callers (shell
//! scripts, service wrappers) can tell configuration mistakes apart from
//! transient lookup failures.

use super::types::SdgetError;

/// The stage of a lookup that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStage {
    /// Invalid command-line arguments
    Usage,
    /// The source could not be turned into a record provider
    Provider,
    /// Records could not be fetched from the provider
    Fetch,
    /// The key did not resolve to the expected number of values
    Lookup,
    /// Values could not be written out
    Output,
}

impl FailureStage {
    /// Process exit code for a failure in this stage.
    pub fn exit_code(self) -> i32 {
        match self {
            FailureStage::Usage => 1,
            FailureStage::Provider => 2,
            FailureStage::Fetch => 3,
            FailureStage::Lookup => 4,
            FailureStage::Output => 5,
        }
    }

    /// Human-readable prefix for error messages from this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureStage::Usage => "Error in arguments",
            FailureStage::Provider => "Error configuring record source",
            FailureStage::Fetch => "Error fetching records",
            FailureStage::Lookup => "Error looking up values",
            FailureStage::Output => "Error writing output values",
        }
    }
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SdgetError {
    /// Categorizes the error by the stage that raises it.
    pub fn stage(&self) -> FailureStage {
        match self {
            SdgetError::UsageError(_) => FailureStage::Usage,
            SdgetError::MalformedUri { .. }
            | SdgetError::UnsupportedScheme(_)
            | SdgetError::UnsupportedUriFeature { .. }
            | SdgetError::UnsupportedHost(_)
            | SdgetError::ResolverConfigError(_)
            | SdgetError::InvalidDomain(_) => FailureStage::Provider,
            SdgetError::DnsTransportError { .. }
            | SdgetError::NoSuchDomain(_)
            | SdgetError::DnsServerError { .. }
            | SdgetError::DecodeError { .. }
            | SdgetError::FileReadError { .. } => FailureStage::Fetch,
            SdgetError::NoValueFound(_) | SdgetError::AmbiguousValue { .. } => {
                FailureStage::Lookup
            }
            SdgetError::OutputError(_) => FailureStage::Output,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.stage().exit_code()
    }
}
