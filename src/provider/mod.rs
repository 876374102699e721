//! Record sources.
//!
//! A source string selects exactly one provider variant, once. Every variant
//! exposes the same operation: fetch the raw records, in source order.

mod file;
mod source;

use std::fmt;

pub use crate::dns::DnsProvider;
pub use file::FileProvider;
pub use source::resolve_provider;

use crate::error_handling::Result;

/// The closed set of record sources.
#[derive(Debug, Clone)]
pub enum TxtRecordProvider {
    /// TXT records from a nameserver
    Dns(DnsProvider),
    /// Lines of a local file
    File(FileProvider),
}

impl TxtRecordProvider {
    /// Fetches all raw records from the source.
    ///
    /// Either every record is returned or an error is; never a partial set.
    pub async fn fetch(&self) -> Result<Vec<String>> {
        match self {
            TxtRecordProvider::Dns(provider) => provider.fetch().await,
            TxtRecordProvider::File(provider) => provider.fetch().await,
        }
    }
}

impl fmt::Display for TxtRecordProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxtRecordProvider::Dns(provider) => write!(
                f,
                "DNS TXT records of {} via {}",
                provider.domain(),
                provider.nameserver()
            ),
            TxtRecordProvider::File(provider) => {
                write!(f, "records in file {}", provider.path().display())
            }
        }
    }
}

impl From<DnsProvider> for TxtRecordProvider {
    fn from(provider: DnsProvider) -> Self {
        TxtRecordProvider::Dns(provider)
    }
}

impl From<FileProvider> for TxtRecordProvider {
    fn from(provider: FileProvider) -> Self {
        TxtRecordProvider::File(provider)
    }
}
