//! TXT-style records read from a local file, one record per line.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::LOCALHOST;
use crate::error_handling::{Result, SdgetError};
use crate::records::unquote_record;

/// Reads records from a file on this machine.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Creates a provider for `path`.
    ///
    /// `hostname` is the authority of a `file:` URI. It may be empty,
    /// `localhost`, or this machine's hostname.
    ///
    /// # Errors
    ///
    /// Returns `SdgetError::UnsupportedHost` for any other hostname.
    pub fn new(hostname: &str, path: impl Into<PathBuf>) -> Result<Self> {
        if !hostname.is_empty() && hostname != LOCALHOST {
            let machine_hostname = hostname::get()
                .map(|h| h.to_string_lossy().into_owned())
                .unwrap_or_default();
            if hostname != machine_hostname {
                return Err(SdgetError::UnsupportedHost(hostname.to_string()));
            }
        }
        Ok(Self { path: path.into() })
    }

    /// Path of the records file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file as one record.
    ///
    /// The file is open only for the duration of this call.
    ///
    /// # Errors
    ///
    /// Returns `SdgetError::FileReadError` if the file cannot be opened or
    /// read, or `SdgetError::DecodeError` for a malformed quoted line.
    pub async fn fetch(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).await.map_err(|source| SdgetError::FileReadError {
            path: self.path.clone(),
            source,
        })?;
        let records = self.fetch_from_reader(BufReader::new(file)).await?;
        debug!(
            "Read {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Reads records from an already-open line source.
    pub async fn fetch_from_reader<R>(&self, reader: R) -> Result<Vec<String>>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut records = Vec::new();
        let mut lines = reader.lines();
        loop {
            let line = lines
                .next_line()
                .await
                .map_err(|source| SdgetError::FileReadError {
                    path: self.path.clone(),
                    source,
                })?;
            let Some(line) = line else { break };
            records.push(unquote_record(&line)?);
        }
        Ok(records)
    }
}
