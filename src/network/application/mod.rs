//! # Application Layer Network Protocols
//!
//! This module contains the application layer (OSI Layer 7) protocol
//! implementations of this crate. Each implementation is written against the
//! core network traits, so it works with any transport the platform
//! provides.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: a minimal HTTP/1.0 client plus an HTTP CONNECT tunnel
//!   connector for reaching targets through a forward proxy
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: work with any type implementing
//!   [`Connection`](crate::network::Connection)
//! - **No-std Compatible**: fixed-size buffers, no heap allocation
//! - **Explicit Failures**: every error is surfaced to the caller; nothing
//!   is retried or silently recovered

/// HTTP/1.0 client and CONNECT tunnel implementation.
///
/// Provides a single-exchange HTTP client with pluggable transport and name
/// resolution, and a connector that tunnels connections through an HTTP
/// proxy using the CONNECT method.
pub mod http;
