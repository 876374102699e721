//! TXT record retrieval from a nameserver.

use std::path::Path;

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, RecordType};
use log::debug;

use super::exchange::{build_query, exchange};
use super::nameserver::{add_default_port, canonical_nameserver, system_nameserver};
use crate::error_handling::{Result, SdgetError};
use crate::records::{quote_dns_txt, unquote_dns_txt};

/// Fetches the TXT records of one domain from one nameserver.
#[derive(Debug, Clone)]
pub struct DnsProvider {
    nameserver: String,
    domain: Name,
}

impl DnsProvider {
    /// Creates a provider, falling back to `/etc/resolv.conf` when
    /// `nameserver` is empty.
    ///
    /// # Errors
    ///
    /// Returns `SdgetError::InvalidDomain` for an empty or unparseable domain,
    /// or `SdgetError::ResolverConfigError` if the system nameserver is needed
    /// and cannot be determined.
    pub fn new(nameserver: &str, domain: &str) -> Result<Self> {
        let domain = fqdn(domain)?;
        let nameserver = if nameserver.is_empty() {
            system_nameserver()?
        } else {
            add_default_port(nameserver)
        };
        Ok(Self { nameserver, domain })
    }

    /// Like [`DnsProvider::new`], reading the fallback nameserver from `resolv_conf`.
    pub fn with_resolv_conf(nameserver: &str, domain: &str, resolv_conf: &Path) -> Result<Self> {
        let domain = fqdn(domain)?;
        let nameserver = canonical_nameserver(nameserver, resolv_conf)?;
        Ok(Self { nameserver, domain })
    }

    /// Canonical `host:port` of the nameserver queried.
    pub fn nameserver(&self) -> &str {
        &self.nameserver
    }

    /// Fully qualified domain queried, with its trailing dot.
    pub fn domain(&self) -> String {
        self.domain.to_ascii()
    }

    /// Queries the nameserver and returns every TXT record, unquoted.
    ///
    /// The character-strings of each record are concatenated.
    ///
    /// # Errors
    ///
    /// - `SdgetError::DnsTransportError` if the exchange fails
    /// - `SdgetError::NoSuchDomain` if the nameserver answers NXDOMAIN
    /// - `SdgetError::DnsServerError` for any other failing response code
    /// - `SdgetError::DecodeError` if a record cannot be unquoted
    pub async fn fetch(&self) -> Result<Vec<String>> {
        debug!(
            "Querying {} for TXT records of {}",
            self.nameserver,
            self.domain()
        );
        let query = build_query(self.domain.clone(), RecordType::TXT);
        let response = exchange(&query, &self.nameserver).await?;

        match response.response_code() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(SdgetError::NoSuchDomain(self.domain())),
            code => {
                return Err(SdgetError::DnsServerError {
                    code: code.to_string(),
                    value: u16::from(code),
                })
            }
        }

        let mut records = Vec::new();
        for answer in response.answers() {
            if let Some(RData::TXT(txt)) = answer.data() {
                let data: Vec<u8> = txt.txt_data().concat();
                let presentation = quote_dns_txt(&data);
                debug!("TXT record: \"{presentation}\"");
                records.push(unquote_dns_txt(&presentation)?);
            }
        }
        debug!("Received {} TXT records for {}", records.len(), self.domain());
        Ok(records)
    }
}

fn fqdn(domain: &str) -> Result<Name> {
    if domain.is_empty() {
        return Err(SdgetError::InvalidDomain(String::new()));
    }
    let fqdn = if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    };
    Name::from_ascii(&fqdn).map_err(|_| SdgetError::InvalidDomain(fqdn))
}
