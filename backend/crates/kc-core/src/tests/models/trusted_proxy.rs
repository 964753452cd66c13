use crate::{CoreError, TrustedProxy};

use std::net::IpAddr;

use googletest::prelude::*;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn given_single_address_when_parsed_then_matches_only_that_address() {
    let proxy = TrustedProxy::parse("10.0.0.1").unwrap();

    assert_that!(proxy, eq(TrustedProxy::Address(ip("10.0.0.1"))));
    assert_that!(proxy.contains(ip("10.0.0.1")), eq(true));
    assert_that!(proxy.contains(ip("10.0.0.2")), eq(false));
}

#[test]
fn given_ipv4_network_when_checked_then_matches_addresses_inside_prefix() {
    let proxy = TrustedProxy::parse("10.1.0.0/16").unwrap();

    assert_that!(proxy.contains(ip("10.1.255.3")), eq(true));
    assert_that!(proxy.contains(ip("10.2.0.1")), eq(false));
}

#[test]
fn given_ipv6_network_when_checked_then_matches_addresses_inside_prefix() {
    let proxy = TrustedProxy::parse("fd00::/8").unwrap();

    assert_that!(proxy.contains(ip("fd12:3456::1")), eq(true));
    assert_that!(proxy.contains(ip("fe80::1")), eq(false));
}

#[test]
fn given_ipv4_mapped_peer_when_checked_then_canonical_form_is_compared() {
    let proxy = TrustedProxy::parse("192.168.1.10").unwrap();

    assert_that!(proxy.contains(ip("::ffff:192.168.1.10")), eq(true));
}

#[test]
fn given_zero_prefix_when_checked_then_matches_whole_family() {
    let proxy = TrustedProxy::parse("0.0.0.0/0").unwrap();

    assert_that!(proxy.contains(ip("8.8.8.8")), eq(true));
    assert_that!(proxy.contains(ip("::1")), eq(false));
}

#[test]
fn given_garbage_when_parsed_then_invalid_trusted_proxy_error() {
    let result = TrustedProxy::parse("proxy.internal");

    assert!(matches!(
        result,
        Err(CoreError::InvalidTrustedProxy { .. })
    ));
}

#[test]
fn given_oversized_prefix_when_parsed_then_error_mentions_width() {
    let result = TrustedProxy::parse("10.0.0.0/33");

    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("exceeds 32 bits"));
}

#[test]
fn given_list_with_one_bad_entry_when_parsed_then_whole_list_fails() {
    let result = TrustedProxy::parse_all(&["127.0.0.1", "::1", "nope"]);

    assert_that!(result, err(anything()));
}

#[test]
fn test_display_round_trips_configured_form() {
    assert_eq!(
        TrustedProxy::parse("10.1.0.0/16").unwrap().to_string(),
        "10.1.0.0/16"
    );
    assert_eq!(TrustedProxy::parse("::1").unwrap().to_string(), "::1");
}

#[test]
fn given_network_built_with_oversized_prefix_when_checked_then_matches_base_only() {
    let proxy = TrustedProxy::Network {
        base: ip("10.0.0.1"),
        prefix: 40,
    };

    assert_that!(proxy.contains(ip("10.0.0.1")), eq(true));
    assert_that!(proxy.contains(ip("10.0.0.2")), eq(false));
}
