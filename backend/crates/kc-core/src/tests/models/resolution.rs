use crate::{NoIdentityReason, Resolution, ResolutionPath, ResolvedIdentity};

use std::net::{IpAddr, Ipv4Addr};

#[test]
fn test_resolved_exposes_username_and_email() {
    let resolution = Resolution::Resolved {
        identity: ResolvedIdentity::new("Alice", "a@x.com"),
        path: ResolutionPath::Mapped,
    };

    assert_eq!(resolution.username(), "Alice");
    assert_eq!(resolution.email(), "a@x.com");
    assert_eq!(resolution.path(), Some(ResolutionPath::Mapped));
}

#[test]
fn test_no_identity_yields_empty_strings() {
    let resolution = Resolution::NoIdentity(NoIdentityReason::MissingPeerAddress);

    assert_eq!(resolution.username(), "");
    assert_eq!(resolution.email(), "");
    assert!(resolution.identity().is_none());
    assert!(resolution.path().is_none());
}

#[test]
fn test_no_identity_reason_display_names_the_cause() {
    let untrusted = NoIdentityReason::UntrustedPeer {
        peer: IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
    };
    let missing = NoIdentityReason::MissingAssertion {
        missing: vec!["uuid", "email"],
    };

    assert_eq!(untrusted.to_string(), "peer 203.0.113.7 is not a trusted proxy");
    assert_eq!(
        missing.to_string(),
        "identity assertion is missing uuid, email"
    );
}
