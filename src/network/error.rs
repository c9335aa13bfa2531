//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// This enum defines the errors surfaced by the HTTP client and the CONNECT
/// tunnel, plus a small vocabulary of transport conditions for platform
/// connection implementations to map onto. It is designed to be simple and
/// portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused or otherwise failed at the
    /// transport level.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed by the peer.
    ConnectionClosed,
    /// A URL or `"host:port"` remote string could not be parsed.
    InvalidAddress,
    /// A hostname could not be resolved to an IPv4 address.
    ResolutionError,
    /// The proxy answered a CONNECT request with a non-200 status.
    TunnelRejected,
    /// A malformed status line or header block was received.
    ProtocolError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotOpen => write!(f, "connection not open"),
            Error::WriteError => write!(f, "write failed"),
            Error::ReadError => write!(f, "read failed"),
            Error::ConnectionRefused => write!(f, "connection refused"),
            Error::Timeout => write!(f, "operation timed out"),
            Error::ConnectionClosed => write!(f, "connection closed"),
            Error::InvalidAddress => write!(f, "invalid address"),
            Error::ResolutionError => write!(f, "hostname resolution failed"),
            Error::TunnelRejected => write!(f, "proxy rejected CONNECT"),
            Error::ProtocolError => write!(f, "malformed response"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ResolutionError => defmt::write!(f, "ResolutionError"),
            Error::TunnelRejected => defmt::write!(f, "TunnelRejected"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
        }
    }
}
