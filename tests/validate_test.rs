//! Tests for the form validation helpers.

use creatorsite::validate::{validate_email, validate_message, validate_required};

#[test]
fn test_email_accepts_basic_addresses() {
    assert!(validate_email("a@b.com").is_none());
    assert!(validate_email("  padded@example.org  ").is_none());
    assert!(validate_email("first.last@sub.domain.co").is_none());
}

#[test]
fn test_email_rejects_malformed_addresses() {
    assert!(validate_email("").is_some());
    assert!(validate_email("not-an-email").is_some());
    assert!(validate_email("@domain.com").is_some());
    assert!(validate_email("local@").is_some());
    assert!(validate_email("local@domain").is_some());
    assert!(validate_email("has space@domain.com").is_some());
}

#[test]
fn test_required_field_limits() {
    assert!(validate_required("Acme", "Brand", 200).is_none());
    assert!(validate_required("   ", "Brand", 200).is_some());
    assert!(validate_required(&"x".repeat(201), "Brand", 200).is_some());
}

#[test]
fn test_message_minimum_length() {
    assert!(validate_message("Let's collaborate on a video").is_none());
    assert!(validate_message("too short").is_some());
    assert!(validate_message("").is_some());
}
