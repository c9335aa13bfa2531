//! HTTP/1.0 protocol implementation for constrained clients.
//!
//! This module provides a deliberately minimal HTTP/1.0 client and an HTTP
//! CONNECT tunnel connector. Both are designed for embedded systems and
//! `no_std` environments, with fixed-size buffers and a strict
//! one-exchange-per-connection model.
//!
//! # Features
//!
//! - HTTP/1.0 request/response framing (status line, header lines, blank
//!   line, opaque body, all `\r\n` terminated)
//! - CONNECT handshake turning a proxy connection into a raw relay
//! - Pluggable transport ([`crate::network::Connect`]) and name resolution
//!   ([`crate::network::Resolve`])
//!
//! # Capability limits
//!
//! A response (and a CONNECT reply) is received with a single `read` call of
//! at most [`client::RECV_BUFFER_LEN`] bytes, assuming the peer's answer
//! arrives in one piece. Responses that are larger, or that arrive split
//! across packets, are truncated at whatever the single read returned.
//! Truncation is not an error unless it breaks status-line or header
//! framing. There is no keep-alive, no pipelining, no chunked-transfer
//! decoding, and no TLS.
//!
//! # Usage
//!
//! The main entry points are [`client::Client`] for plain requests and
//! [`tunnel::TunnelConnector`] for proxy tunneling. A `TunnelConnector`
//! itself implements [`crate::network::Connect`], so a `Client` can be
//! composed on top of it to issue requests through a proxy.
//!
//! ```rust,no_run
//! use libhttpc::network::application::http::{Client, Method, Request};
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
//!     url: "http://10.0.0.2:8000/about.txt",
//!     headers: heapless::Vec::new(),
//!     body: None,
//! };
//!
//! // let response = client.request(&request)?;
//! ```

/// HTTP client implementation and supporting types.
///
/// Contains the main [`Client`](client::Client) struct, the
/// connection-oriented [`request_on`](client::request_on) entry point, and
/// all related request/response types.
pub mod client;

/// HTTP CONNECT tunnel connector.
///
/// Contains [`TunnelConnector`](tunnel::TunnelConnector), which establishes
/// raw byte relays to a target host through an HTTP forward proxy.
pub mod tunnel;

/// URL splitting for request targets.
pub mod url;

pub use client::{Client, Header, Method, Request, Response, request_on};
pub use tunnel::TunnelConnector;
pub use url::Url;
