use crate::IdentityAssertion;

use googletest::prelude::*;

fn full() -> IdentityAssertion {
    IdentityAssertion::new(
        Some("u-1".to_string()),
        Some("a@x.com".to_string()),
        Some("alice".to_string()),
    )
}

#[test]
fn given_all_fields_when_completed_then_returns_triple() {
    let assertion = full();

    assert_that!(assertion.complete(), some(eq(("u-1", "a@x.com", "alice"))));
    assert!(assertion.missing_fields().is_empty());
}

#[test]
fn given_missing_uuid_when_completed_then_none() {
    let assertion = IdentityAssertion {
        uuid: None,
        ..full()
    };

    assert_that!(assertion.complete(), none());
    assert_eq!(assertion.missing_fields(), vec!["uuid"]);
}

#[test]
fn given_empty_values_when_constructed_then_treated_as_absent() {
    let assertion = IdentityAssertion::new(
        Some(String::new()),
        Some("a@x.com".to_string()),
        Some(String::new()),
    );

    assert_that!(assertion.uuid, none());
    assert_that!(assertion.preferred_username, none());
    assert_eq!(
        assertion.missing_fields(),
        vec!["uuid", "preferred_username"]
    );
}

#[test]
fn given_struct_literal_with_empty_email_when_completed_then_none() {
    let assertion = IdentityAssertion {
        email: Some(String::new()),
        ..full()
    };

    assert_that!(assertion.complete(), none());
    assert_eq!(assertion.missing_fields(), vec!["email"]);
}
