//! URL splitting for request targets.

use crate::network::error::Error;

/// A `scheme://host[:port]/path` URL split into its parts.
///
/// All fields borrow from the input string; parsing copies nothing. The
/// query and fragment portions of a URL are recognized as delimiters but
/// are not carried into [`path`](Url::path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a> {
    /// Scheme as written. Recognized but otherwise ignored by the client.
    pub scheme: &'a str,
    /// Hostname or IPv4 literal, without the port.
    pub host: &'a str,
    /// Port, defaulting to 80 when the URL carries none.
    pub port: u16,
    /// The `host[:port]` part exactly as written. This is what goes into
    /// the `Host` header, never the resolved address.
    pub netloc: &'a str,
    /// Path component, possibly empty.
    pub path: &'a str,
}

impl<'a> Url<'a> {
    /// Split a URL into scheme, netloc, host, port, and path.
    ///
    /// Returns [`Error::InvalidAddress`] when the input has no `://`
    /// separator or carries a port that does not parse as a `u16`.
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let (scheme, rest) = input.split_once("://").ok_or(Error::InvalidAddress)?;

        let netloc_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let netloc = &rest[..netloc_end];
        let after_netloc = &rest[netloc_end..];

        let path = if after_netloc.starts_with('/') {
            let path_end = after_netloc.find(['?', '#']).unwrap_or(after_netloc.len());
            &after_netloc[..path_end]
        } else {
            ""
        };

        let (host, port) = match netloc.split_once(':') {
            Some((host, port)) => {
                (host, port.parse::<u16>().map_err(|_| Error::InvalidAddress)?)
            }
            None => (netloc, 80),
        };

        Ok(Self {
            scheme,
            host,
            port,
            netloc,
            path,
        })
    }
}

/// Report whether `host` is shaped like a dotted IPv4 literal.
///
/// The check is purely syntactic: four runs of ASCII digits separated by
/// dots, with no octet-range validation. Hosts matching this shape bypass
/// name resolution and are handed to the transport as written.
pub fn is_ipv4_literal(host: &str) -> bool {
    let mut fields = 0;
    for field in host.split('.') {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        fields += 1;
    }
    fields == 4
}
