use criterion::{BatchSize, Criterion, Throughput};
use rand::Rng;

use libhttpc::network::application::http::client::{Method, Request, request_on};
use libhttpc::network::error::Error;
use libhttpc::network::{Close, Connection, Read, Write};

/// In-memory connection playing back one prepared response.
struct PreparedConnection {
    data: Vec<u8>,
    read_pos: usize,
}

impl PreparedConnection {
    fn new(data: Vec<u8>) -> Self {
        Self { data, read_pos: 0 }
    }
}

impl Read for PreparedConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.data.len() - self.read_pos;
        let len = buf.len().min(remaining);
        buf[..len].copy_from_slice(&self.data[self.read_pos..self.read_pos + len]);
        self.read_pos += len;
        Ok(len)
    }
}

impl Write for PreparedConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for PreparedConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for PreparedConnection {}

fn request() -> Request<'static> {
    Request {
        method: Method::Get,
        url: "http://10.0.0.2/bench",
        headers: heapless::Vec::new(),
        body: None,
    }
}

pub fn bench_parse_small_response(c: &mut Criterion) {
    let response = b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
        .to_vec();

    let mut group = c.benchmark_group("parse_small_response");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("parse_small_response", |b| {
        b.iter_batched_ref(
            || PreparedConnection::new(response.clone()),
            |conn| {
                request_on(conn, &request()).expect("Failed to parse response");
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

pub fn bench_parse_large_response(c: &mut Criterion) {
    // Fill the receive window: a handful of headers and a random body
    // close to the 10240-byte read limit.
    let mut body = vec![0u8; 10000];
    rand::thread_rng().fill(&mut body[..]);

    let mut response =
        b"HTTP/1.0 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 10000\r\n\r\n"
            .to_vec();
    response.extend_from_slice(&body);

    let mut group = c.benchmark_group("parse_large_response");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("parse_large_response", |b| {
        b.iter_batched_ref(
            || PreparedConnection::new(response.clone()),
            |conn| {
                request_on(conn, &request()).expect("Failed to parse response");
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}
