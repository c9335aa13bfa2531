//! # libhttpc - minimal HTTP/1.0 client
//!
//! A small, synchronous HTTP/1.0 client with optional HTTP CONNECT proxy
//! tunneling, designed for embedded systems and `no_std` environments. The
//! library performs no I/O of its own: the platform supplies the TCP stack
//! and name resolver through a pair of trait seams, which keeps the core
//! deterministic, portable, and easy to test against scripted transports.
//!
//! ## Features
//!
//! - HTTP/1.0 request serialization and response parsing
//! - HTTP CONNECT tunneling through a forward proxy
//! - Connection agnostic: works with any transport implementing the
//!   [`network::Connection`] traits
//! - Pluggable name resolution via the [`network::Resolve`] trait, with
//!   IPv4 literals bypassing the resolver entirely
//! - Fixed-size buffers for predictable memory usage
//!
//! ## Capability limits
//!
//! One request/response exchange per connection, one `read` call per
//! response (at most 10240 bytes; larger or slower responses are
//! truncated), no keep-alive, no chunked-transfer decoding, no TLS. These
//! are deliberate bounds, not accidents; see the module documentation of
//! [`network::application::http`] for details.
//!
//! ## Basic HTTP Request Example
//!
//! ```rust,no_run
//! use libhttpc::network::application::http::client::{Client, Method, Request};
//! # use libhttpc::network::{Connect, Connection, Resolve};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl libhttpc::network::Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl libhttpc::network::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl libhttpc::network::Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = ();
//! #     fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
//! #         Ok(MockConnection)
//! #     }
//! # }
//! # struct MockResolver;
//! # impl Resolve for MockResolver {
//! #     type Error = ();
//! #     fn resolve(&mut self, _host: &str) -> Result<core::net::Ipv4Addr, Self::Error> {
//! #         Ok(core::net::Ipv4Addr::new(127, 0, 0, 1))
//! #     }
//! # }
//!
//! let mut client = Client::new(MockNetwork, MockResolver);
//!
//! let request = Request {
//!     method: Method::Get,
//!     url: "http://cors.fasionchan.com:80/about.txt",
//!     headers: heapless::Vec::new(),
//!     body: None,
//! };
//!
//! // let response = client.request(&request)?;
//! // println!("{}", response.status_code);
//! ```
//!
//! ## CONNECT Tunnel Example
//!
//! ```rust,no_run
//! use libhttpc::network::application::http::tunnel::TunnelConnector;
//! # use libhttpc::network::{Connect, Connection};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl libhttpc::network::Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl libhttpc::network::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl libhttpc::network::Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = ();
//! #     fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
//! #         Ok(MockConnection)
//! #     }
//! # }
//!
//! let mut tunnel = TunnelConnector::new(MockNetwork, "127.0.0.1", 13128);
//!
//! // let conn = tunnel.connect("10.0.0.2", 9999)?;
//! // conn now relays bytes to 10.0.0.2:9999 through the proxy.
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer providing the transport and resolver seams
/// together with the HTTP client and CONNECT tunnel implementations.
pub mod network;
