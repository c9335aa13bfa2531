//! HTTP CONNECT tunneling.
//!
//! A CONNECT tunnel turns a connection to an HTTP forward proxy into a raw
//! byte relay: the client sends `CONNECT host:port HTTP/1.0` followed by a
//! blank line, the proxy dials the target, answers with a status line, and
//! from then on copies bytes in both directions without interpreting them.
//! Any protocol, HTTP or not, can run over the relayed stream.
//!
//! # Handshake
//!
//! ```text
//! client                proxy                 target
//!   | CONNECT h:p ------> |                      |
//!   |                     | -----  TCP dial ---> |
//!   | <----- 200 -------- |                      |
//!   | <======== opaque byte relay =============> |
//! ```
//!
//! The proxy's reply is received with a single `read` call and is assumed
//! to arrive in one piece; its status token is the only part inspected.
//! Anything other than `200` rejects the tunnel and the proxy connection is
//! closed before the error is returned.

use core::fmt::Write;

use heapless::String;

use super::client::write_all;
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection};

// The CONNECT reply is read once into a buffer of this size, like any
// other response in this crate.
const RECV_BUFFER_LEN: usize = 10240;

// Scratch space for the CONNECT request line and the proxy remote string.
const MAX_CONNECT_LINE_LEN: usize = 300;
const MAX_REMOTE_LEN: usize = 262;

/// Establishes connections to target endpoints through an HTTP CONNECT
/// proxy.
///
/// The connector owns the underlying transport seam and remembers the
/// proxy endpoint; each [`connect`](TunnelConnector::connect) call dials
/// the proxy, performs one CONNECT handshake, and on success returns the
/// proxy connection ready to carry application traffic to the target.
///
/// `TunnelConnector` also implements [`Connect`] itself, so an HTTP
/// [`Client`](super::client::Client) (or anything else written against the
/// `Connect` seam) can be composed on top of it and transparently reach
/// its targets through the proxy.
pub struct TunnelConnector<'a, N: Connect> {
    network: N,
    proxy_host: &'a str,
    proxy_port: u16,
}

impl<'a, N: Connect> TunnelConnector<'a, N> {
    /// Create a connector tunneling through the given proxy endpoint.
    pub fn new(network: N, proxy_host: &'a str, proxy_port: u16) -> Self {
        Self {
            network,
            proxy_host,
            proxy_port,
        }
    }

    /// Open a relayed connection to `target_host:target_port`.
    ///
    /// # Errors
    ///
    /// * [`Error::ConnectionRefused`] - the transport-level connect to the
    ///   proxy failed
    /// * [`Error::WriteError`] / [`Error::ReadError`] - the handshake
    ///   exchange failed at the transport level
    /// * [`Error::TunnelRejected`] - the proxy answered with a non-200
    ///   status
    /// * [`Error::ProtocolError`] - the proxy's reply had no status token
    ///
    /// On any handshake failure the proxy connection is closed before the
    /// error is returned.
    pub fn connect(
        &mut self,
        target_host: &str,
        target_port: u16,
    ) -> Result<N::Connection, Error> {
        let mut remote: String<MAX_REMOTE_LEN> = String::new();
        write!(remote, "{}:{}", self.proxy_host, self.proxy_port)
            .map_err(|_| Error::InvalidAddress)?;

        let mut connection = self
            .network
            .connect(&remote)
            .map_err(|_| Error::ConnectionRefused)?;

        match handshake(&mut connection, target_host, target_port) {
            Ok(()) => Ok(connection),
            Err(e) => {
                // The proxy socket is useless after a failed handshake.
                let _ = connection.close();
                Err(e)
            }
        }
    }
}

impl<'a, N: Connect> Connect for TunnelConnector<'a, N> {
    type Connection = N::Connection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let (host, port) = remote.rsplit_once(':').ok_or(Error::InvalidAddress)?;
        let port = port.parse::<u16>().map_err(|_| Error::InvalidAddress)?;
        self.connect(host, port)
    }
}

/// Send the CONNECT request and check the proxy's reply.
fn handshake<C: Connection>(
    connection: &mut C,
    target_host: &str,
    target_port: u16,
) -> Result<(), Error> {
    // Request line plus the terminating blank line; no headers, no body.
    let mut line: String<MAX_CONNECT_LINE_LEN> = String::new();
    write!(line, "CONNECT {}:{} HTTP/1.0\r\n\r\n", target_host, target_port)
        .map_err(|_| Error::WriteError)?;
    write_all(connection, line.as_bytes())?;
    connection.flush().map_err(|_| Error::WriteError)?;

    // One read; the whole reply is assumed to arrive in it.
    let mut reply_buf = [0u8; RECV_BUFFER_LEN];
    let n = connection
        .read(&mut reply_buf)
        .map_err(|_| Error::ReadError)?;

    // Token index 1 of the space-split reply is the status code.
    let reply = core::str::from_utf8(&reply_buf[..n]).map_err(|_| Error::ProtocolError)?;
    let code = reply.split(' ').nth(1).ok_or(Error::ProtocolError)?.trim();

    if code != "200" {
        return Err(Error::TunnelRejected);
    }

    Ok(())
}
