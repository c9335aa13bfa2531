//! Minimal HTTP/1.0 client.
//!
//! One request, one response, one connection. The request is serialized as
//! separate writes (request line, `Host`, caller headers, blank line, body)
//! and the response is received with a single `read` call, assuming the
//! peer's answer arrives in one piece. See the module documentation of
//! [`super`] for the resulting capability limits.

use core::fmt::Write;

use heapless::{String, Vec};

use super::url::{Url, is_ipv4_literal};
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Resolve};

/// Maximum number of headers carried by a request or stored from a response.
pub const MAX_HEADERS: usize = 32;
/// Maximum length of a stored header name.
pub const MAX_HEADER_NAME_LEN: usize = 64;
/// Maximum length of a stored header value.
pub const MAX_HEADER_VALUE_LEN: usize = 256;
/// Receive buffer size. A response is read with a single `read` call of at
/// most this many bytes; anything the peer sends beyond it is truncated.
pub const RECV_BUFFER_LEN: usize = 10240;

// Scratch space for one serialized line and one "host:port" remote string.
const MAX_LINE_LEN: usize = 512;
const MAX_REMOTE_LEN: usize = 262;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single header name/value pair, name case preserved as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String<MAX_HEADER_NAME_LEN>,
    pub value: String<MAX_HEADER_VALUE_LEN>,
}

/// An HTTP request to be issued once.
///
/// `url` carries the full `scheme://host[:port]/path` target; the host part
/// decides where the connection goes while the netloc as written becomes
/// the `Host` header. Caller headers are sent in insertion order. No header
/// is added on the caller's behalf: supply `Content-Length` yourself when
/// the server needs it to frame `body`.
#[derive(Debug)]
pub struct Request<'a> {
    pub method: Method,
    pub url: &'a str,
    pub headers: Vec<Header, MAX_HEADERS>,
    pub body: Option<&'a [u8]>,
}

/// A parsed HTTP response.
///
/// Constructed once per request and immutable afterwards. `body` holds the
/// raw bytes that followed the header block in the single receive, with no
/// `Content-Length` validation applied.
#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<Header, MAX_HEADERS>,
    pub body: Vec<u8, RECV_BUFFER_LEN>,
}

impl Response {
    /// Look up a header value by name (ASCII case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// A minimal HTTP/1.0 client over pluggable transport and resolution.
///
/// Each call to [`request`](Client::request) opens a fresh connection
/// through the [`Connect`] seam, drives exactly one exchange, and closes
/// the connection before returning, on success and failure alike. Hosts
/// that are IPv4 literals are connected to as written; anything else goes
/// through the [`Resolve`] seam first.
pub struct Client<N: Connect, R: Resolve> {
    network: N,
    resolver: R,
}

impl<N: Connect, R: Resolve> Client<N, R> {
    /// Create a client from a transport connector and a resolver.
    pub fn new(network: N, resolver: R) -> Self {
        Self { network, resolver }
    }

    /// Issue a request on a connection opened and owned by the client.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAddress`] - the URL could not be split
    /// * [`Error::ResolutionError`] - the resolver failed for a non-literal host
    /// * [`Error::ConnectionRefused`] - the transport-level connect failed
    /// * [`Error::WriteError`] / [`Error::ReadError`] - send or receive failed
    /// * [`Error::ProtocolError`] - the response was malformed
    pub fn request(&mut self, request: &Request) -> Result<Response, Error> {
        let url = Url::parse(request.url)?;

        // IPv4 literals are used verbatim; the resolver is never consulted
        // for them.
        let mut remote: String<MAX_REMOTE_LEN> = String::new();
        if is_ipv4_literal(url.host) {
            write!(remote, "{}:{}", url.host, url.port).map_err(|_| Error::InvalidAddress)?;
        } else {
            let address = self
                .resolver
                .resolve(url.host)
                .map_err(|_| Error::ResolutionError)?;
            write!(remote, "{}:{}", address, url.port).map_err(|_| Error::InvalidAddress)?;
        }

        let mut connection = self
            .network
            .connect(&remote)
            .map_err(|_| Error::ConnectionRefused)?;

        let result = request_on(&mut connection, request);
        // The connection backs exactly one exchange; close it on every path.
        let _ = connection.close();
        result
    }
}

/// Issue a request over an existing connection.
///
/// The caller keeps ownership of `connection` and is responsible for
/// closing it; this allows driving a request over a tunnel-provided or
/// otherwise pre-established byte stream. The URL's host part is not
/// re-resolved here; only its netloc (for the `Host` header) and path are
/// used.
pub fn request_on<C: Connection>(
    connection: &mut C,
    request: &Request,
) -> Result<Response, Error> {
    let url = Url::parse(request.url)?;

    send_request(connection, request, &url)?;

    // One receive of at most RECV_BUFFER_LEN bytes. A response that is
    // larger, or that arrives split across packets, is truncated here.
    let mut response_buf = [0u8; RECV_BUFFER_LEN];
    let n = connection
        .read(&mut response_buf)
        .map_err(|_| Error::ReadError)?;

    parse_response(&response_buf[..n])
}

/// Serialize and send the request. The pieces go out as separate writes, in
/// an order servers that parse incrementally rely on: request line, `Host`,
/// caller headers, blank line, body.
fn send_request<C: Connection>(
    connection: &mut C,
    request: &Request,
    url: &Url,
) -> Result<(), Error> {
    let mut line: String<MAX_LINE_LEN> = String::new();

    write!(line, "{} {} HTTP/1.0\r\n", request.method.as_str(), url.path)
        .map_err(|_| Error::WriteError)?;
    write_all(connection, line.as_bytes())?;

    // Host carries the netloc as written in the URL, not the resolved
    // address.
    line.clear();
    write!(line, "Host: {}\r\n", url.netloc).map_err(|_| Error::WriteError)?;
    write_all(connection, line.as_bytes())?;

    for header in &request.headers {
        line.clear();
        write!(line, "{}: {}\r\n", header.name, header.value).map_err(|_| Error::WriteError)?;
        write_all(connection, line.as_bytes())?;
    }

    write_all(connection, b"\r\n")?;

    if let Some(body) = request.body {
        write_all(connection, body)?;
    }

    connection.flush().map_err(|_| Error::WriteError)
}

/// Parse a raw response buffer into status code, headers, and body.
fn parse_response(raw: &[u8]) -> Result<Response, Error> {
    // Status line: everything before the first \r\n, split on single
    // spaces; field index 1 is the status code.
    let line_end = find_slice(raw, b"\r\n").ok_or(Error::ProtocolError)?;
    let code_field = raw[..line_end]
        .split(|&b| b == b' ')
        .nth(1)
        .ok_or(Error::ProtocolError)?;
    let status_code = core::str::from_utf8(code_field)
        .map_err(|_| Error::ProtocolError)?
        .parse::<u16>()
        .map_err(|_| Error::ProtocolError)?;

    let mut parsed = line_end + 2;

    // Header lines, one per \r\n, until the empty line that ends the block.
    let mut headers: Vec<Header, MAX_HEADERS> = Vec::new();
    loop {
        let line_end = find_slice(&raw[parsed..], b"\r\n").ok_or(Error::ProtocolError)?;
        let header_line = &raw[parsed..parsed + line_end];
        parsed += line_end + 2;

        if header_line.is_empty() {
            break;
        }

        let header_line = core::str::from_utf8(header_line).map_err(|_| Error::ProtocolError)?;
        let (name, value) = header_line.split_once(':').ok_or(Error::ProtocolError)?;
        store_header(&mut headers, name.trim(), value.trim())?;
    }

    // Everything after the blank line is the body, verbatim.
    let body = Vec::from_slice(&raw[parsed..]).map_err(|_| Error::ProtocolError)?;

    Ok(Response {
        status_code,
        headers,
        body,
    })
}

/// Store a header; a later duplicate name overwrites the earlier value.
fn store_header(
    headers: &mut Vec<Header, MAX_HEADERS>,
    name: &str,
    value: &str,
) -> Result<(), Error> {
    let value = String::try_from(value).map_err(|_| Error::ProtocolError)?;

    if let Some(existing) = headers.iter_mut().find(|h| h.name.as_str() == name) {
        existing.value = value;
        return Ok(());
    }

    let name = String::try_from(name).map_err(|_| Error::ProtocolError)?;
    headers
        .push(Header { name, value })
        .map_err(|_| Error::ProtocolError)
}

/// Write an entire buffer, looping over short writes.
pub(crate) fn write_all<C: Connection>(connection: &mut C, buf: &[u8]) -> Result<(), Error> {
    let mut written = 0;
    while written < buf.len() {
        match connection.write(&buf[written..]) {
            Ok(0) => return Err(Error::ConnectionClosed),
            Ok(n) => written += n,
            Err(_) => return Err(Error::WriteError),
        }
    }
    Ok(())
}

/// Finds the first occurrence of a slice in another slice and returns its
/// starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
