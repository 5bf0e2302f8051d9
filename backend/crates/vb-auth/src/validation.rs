//! Input checks that run before any network call.

use crate::{AuthFailure, AuthResult};

pub fn validate_email(email: &str) -> AuthResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthFailure::validation("Email is required."));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthFailure::validation("Please enter a valid email address.")),
    }
}

/// Length and confirmation check for a new password.
pub fn validate_new_password(password: &str, confirmation: &str, min_length: usize) -> AuthResult<()> {
    if password.chars().count() < min_length {
        return Err(AuthFailure::validation(format!(
            "Password must be at least {min_length} characters."
        )));
    }
    if password != confirmation {
        return Err(AuthFailure::validation("Passwords do not match."));
    }
    Ok(())
}
