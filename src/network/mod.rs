//! A network abstraction layer for minimal synchronous clients
//!
//! This module defines the traits that separate protocol logic from the
//! platform: a byte-stream connection (`Read`/`Write`/`Close`), a connector
//! that opens connections to `"host:port"` remotes, and a hostname resolver.
//! The HTTP client and CONNECT tunnel in [`application`] are written purely
//! against these seams, so any TCP stack (`std::net`, an embedded IP stack,
//! or a scripted mock) can carry them.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

use core::net::Ipv4Addr;

/// Common error types for network operations
pub mod error;

/// Application layer protocol implementations
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Resolve, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous byte-stream connection bound to a remote endpoint.
///
/// A connection is owned exclusively by its creator until closed or handed
/// off. The clients in this crate drive at most one request/response
/// exchange over a given connection.
pub trait Connection: Read + Write + Close {}

/// A synchronous connector: the platform TCP stack seam.
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to a `"host:port"` remote
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}

/// A hostname resolver: the name-resolution seam.
///
/// Only consulted for hosts that are not IPv4 literals; literals are passed
/// to [`Connect`] verbatim without touching the resolver.
pub trait Resolve {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Resolve a hostname to an IPv4 address
    fn resolve(&mut self, host: &str) -> Result<Ipv4Addr, Self::Error>;
}
