//! Source string dispatch.
//!
//! Supported forms:
//! - bare domain: `example.com`
//! - DNS URI (RFC 4501): `dns:example.com`, `dns://ns.example.com/example.com`
//! - file URI: `file:///path/to/records`, `file://localhost/path/to/records`

use log::debug;

use super::{DnsProvider, FileProvider, TxtRecordProvider};
use crate::error_handling::{Result, SdgetError, UriComponent};
use crate::uri::{parse_uri, ParsedUri};

/// Builds the provider for `source`.
///
/// A source without a colon is a bare domain name queried through
/// `default_nameserver`. Otherwise it is parsed as a URI and dispatched on
/// its scheme. In `dns:` URIs a non-empty authority replaces the default
/// nameserver.
///
/// # Errors
///
/// - `SdgetError::MalformedUri` if the source contains a colon but is not a URI
/// - `SdgetError::UnsupportedScheme` for schemes other than `dns` and `file`
/// - `SdgetError::UnsupportedUriFeature` if a query or fragment is present
/// - any error from constructing the provider itself
pub fn resolve_provider(source: &str, default_nameserver: &str) -> Result<TxtRecordProvider> {
    if !source.contains(':') {
        debug!("Treating {source:?} as a bare domain name");
        return Ok(DnsProvider::new(default_nameserver, source)?.into());
    }

    let uri = parse_uri(source)?;
    match uri.scheme.as_str() {
        "dns" => {
            reject_query_and_fragment(&uri, source)?;
            let nameserver = if uri.authority.is_empty() {
                default_nameserver
            } else {
                &uri.authority
            };
            let domain = uri.path.strip_prefix('/').unwrap_or(&uri.path);
            Ok(DnsProvider::new(nameserver, domain)?.into())
        }
        "file" => {
            reject_query_and_fragment(&uri, source)?;
            Ok(FileProvider::new(&uri.authority, &uri.path)?.into())
        }
        scheme => Err(SdgetError::UnsupportedScheme(scheme.to_string())),
    }
}

fn reject_query_and_fragment(uri: &ParsedUri, source: &str) -> Result<()> {
    if !uri.query.is_empty() {
        return Err(SdgetError::UnsupportedUriFeature {
            component: UriComponent::Query,
            uri: source.to_string(),
        });
    }
    if !uri.fragment.is_empty() {
        return Err(SdgetError::UnsupportedUriFeature {
            component: UriComponent::Fragment,
            uri: source.to_string(),
        });
    }
    Ok(())
}
