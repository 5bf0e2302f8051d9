use crate::validation::{validate_email, validate_new_password};

use googletest::prelude::*;

#[test]
fn given_plausible_emails_when_validated_then_accepted() {
    assert_that!(validate_email("owner@clinic.test"), ok(anything()));
    assert_that!(validate_email("  owner@clinic.test  "), ok(anything()));
}

#[test]
fn given_malformed_emails_when_validated_then_rejected() {
    for email in ["", "   ", "owner", "@clinic.test", "owner@"] {
        assert_that!(validate_email(email), err(anything()));
    }
}

#[test]
fn given_password_shorter_than_minimum_when_validated_then_rejected() {
    let result = validate_new_password("abc12", "abc12", 6);

    assert_that!(
        result.unwrap_err().user_message(),
        eq("Password must be at least 6 characters.")
    );
}

#[test]
fn given_mismatched_confirmation_when_validated_then_rejected() {
    let result = validate_new_password("secret1", "secret2", 6);

    assert_that!(result.unwrap_err().user_message(), eq("Passwords do not match."));
}

#[test]
fn given_password_at_minimum_length_when_validated_then_accepted() {
    assert_that!(validate_new_password("secret", "secret", 6), ok(anything()));
}
