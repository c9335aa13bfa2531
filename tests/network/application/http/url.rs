use libhttpc::network::application::http::url::{Url, is_ipv4_literal};
use libhttpc::network::error::Error;

#[test]
fn splits_a_full_url() {
    let url = Url::parse("http://cors.fasionchan.com:80/about.txt").unwrap();

    assert_eq!(url.scheme, "http");
    assert_eq!(url.host, "cors.fasionchan.com");
    assert_eq!(url.port, 80);
    assert_eq!(url.netloc, "cors.fasionchan.com:80");
    assert_eq!(url.path, "/about.txt");
}

#[test]
fn port_defaults_to_80() {
    let url = Url::parse("http://example.com/index.html").unwrap();

    assert_eq!(url.port, 80);
    assert_eq!(url.netloc, "example.com");
}

#[test]
fn path_may_be_empty() {
    let url = Url::parse("http://example.com").unwrap();

    assert_eq!(url.host, "example.com");
    assert_eq!(url.path, "");
}

#[test]
fn query_and_fragment_are_not_part_of_the_path() {
    let url = Url::parse("http://example.com/search?q=1#top").unwrap();
    assert_eq!(url.path, "/search");

    // A query directly after the netloc leaves the path empty.
    let url = Url::parse("http://example.com?q=1").unwrap();
    assert_eq!(url.netloc, "example.com");
    assert_eq!(url.path, "");
}

#[test]
fn missing_scheme_separator_is_rejected() {
    assert_eq!(Url::parse("example.com/x").unwrap_err(), Error::InvalidAddress);
}

#[test]
fn unparseable_port_is_rejected() {
    assert_eq!(
        Url::parse("http://example.com:http/x").unwrap_err(),
        Error::InvalidAddress
    );
    assert_eq!(
        Url::parse("http://example.com:99999/x").unwrap_err(),
        Error::InvalidAddress
    );
}

#[test]
fn ipv4_literal_shapes() {
    assert!(is_ipv4_literal("10.0.0.2"));
    assert!(is_ipv4_literal("127.0.0.1"));

    // Purely syntactic: octet ranges are not validated.
    assert!(is_ipv4_literal("999.999.999.999"));

    assert!(!is_ipv4_literal("example.com"));
    assert!(!is_ipv4_literal("1.2.3"));
    assert!(!is_ipv4_literal("1.2.3.4.5"));
    assert!(!is_ipv4_literal("1.2.3.a"));
    assert!(!is_ipv4_literal("1..2.3"));
    assert!(!is_ipv4_literal(""));
    assert!(!is_ipv4_literal("10.0.0.2:80"));
}
