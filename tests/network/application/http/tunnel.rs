use std::net::Ipv4Addr;

use libhttpc::network::Write;
use libhttpc::network::application::http::client::{Client, Method, Request};
use libhttpc::network::application::http::tunnel::TunnelConnector;
use libhttpc::network::error::Error;

use crate::network::{MockNetwork, MockResolver, RefusingNetwork};

#[test]
fn accepted_handshake_returns_a_usable_connection() {
    let network = MockNetwork::new(b"HTTP/1.0 200 Connection established\r\n\r\n");
    let remotes = network.remotes.clone();
    let writes = network.writes.clone();

    let mut tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    let mut conn = tunnel.connect("10.0.0.2", 9999).unwrap();

    // The proxy was dialed, not the target.
    assert_eq!(remotes.borrow().as_slice(), ["127.0.0.1:13128"]);
    assert_eq!(
        writes.borrow().as_slice(),
        b"CONNECT 10.0.0.2:9999 HTTP/1.0\r\n\r\n"
    );

    // The returned connection carries application traffic from here on.
    conn.write(b"abc").unwrap();
    assert!(writes.borrow().ends_with(b"abc"));
}

#[test]
fn rejected_handshake_fails_and_closes_the_proxy_connection() {
    let network = MockNetwork::new(b"HTTP/1.0 403 Forbidden\r\n\r\n");
    let closed = network.closed.clone();

    let mut tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    let err = tunnel.connect("10.0.0.2", 9999).unwrap_err();

    assert_eq!(err, Error::TunnelRejected);
    assert!(closed.get());
}

#[test]
fn empty_reply_is_a_protocol_error() {
    let network = MockNetwork::new(b"");
    let closed = network.closed.clone();

    let mut tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    let err = tunnel.connect("10.0.0.2", 9999).unwrap_err();

    assert_eq!(err, Error::ProtocolError);
    assert!(closed.get());
}

#[test]
fn reply_without_status_token_is_a_protocol_error() {
    let network = MockNetwork::new(b"HTTP/1.0\r\n\r\n");

    let mut tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    let err = tunnel.connect("10.0.0.2", 9999).unwrap_err();

    assert_eq!(err, Error::ProtocolError);
}

#[test]
fn bare_status_reply_is_accepted_after_trimming() {
    // Token 1 of "HTTP/1.0 200\r\n\r\n" carries the line terminators;
    // trimming recovers the bare code.
    let network = MockNetwork::new(b"HTTP/1.0 200\r\n\r\n");

    let mut tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    assert!(tunnel.connect("10.0.0.2", 9999).is_ok());
}

#[test]
fn refused_proxy_connect_is_surfaced() {
    let mut tunnel = TunnelConnector::new(RefusingNetwork, "127.0.0.1", 13128);
    let err = tunnel.connect("10.0.0.2", 9999).unwrap_err();

    assert_eq!(err, Error::ConnectionRefused);
}

#[test]
fn client_composes_over_the_tunnel() {
    // First read answers the CONNECT handshake, second read answers the
    // HTTP exchange relayed through the proxy.
    let network = MockNetwork::with_segments(vec![
        b"HTTP/1.0 200 Connection established\r\n\r\n",
        b"HTTP/1.0 200 OK\r\n\r\nrelayed",
    ]);
    let remotes = network.remotes.clone();
    let writes = network.writes.clone();

    let tunnel = TunnelConnector::new(network, "127.0.0.1", 13128);
    let mut client = Client::new(tunnel, MockResolver::new(Ipv4Addr::new(10, 0, 0, 2)));

    let request = Request {
        method: Method::Get,
        url: "http://10.0.0.2:9999/data",
        headers: heapless::Vec::new(),
        body: None,
    };
    let response = client.request(&request).unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(&response.body[..], b"relayed");

    // Only the proxy endpoint was ever dialed; the CONNECT line went out
    // before the tunneled request.
    assert_eq!(remotes.borrow().as_slice(), ["127.0.0.1:13128"]);
    let sent = writes.borrow().clone();
    let sent = std::str::from_utf8(&sent).unwrap();
    assert!(sent.starts_with("CONNECT 10.0.0.2:9999 HTTP/1.0\r\n\r\n"));
    assert!(sent.contains("GET /data HTTP/1.0\r\n"));
}
