//! Error handling and exit-code categorization.
//!
//! This module provides:
//! - The error taxonomy shared by every stage of a lookup
//! - Initialization error types
//! - Mapping from errors to the pipeline stage that failed and its exit code
//!
//! Every error is terminal for a single invocation. Stages are:
//! - **Usage**: invalid argument combinations, detected before any work
//! - **Provider**: building a record provider from the source string
//! - **Fetch**: retrieving raw records from DNS or a file
//! - **Lookup**: finding the value(s) for the requested key
//! - **Output**: writing the values to stdout

mod categorization;
mod types;

// Re-export public API
pub use categorization::FailureStage;
pub use types::{InitializationError, Result, SdgetError, UriComponent};
