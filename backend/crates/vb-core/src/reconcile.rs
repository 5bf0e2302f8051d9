//! Owner resolution for appointments that only captured an email.

use crate::{Appointment, NewAppointment, Profile};

use std::collections::HashMap;

/// Anything that may carry an explicit owner and/or a contact email.
pub trait OwnerHint {
    fn explicit_owner(&self) -> Option<&str>;
    fn contact_email(&self) -> Option<&str>;
}

impl OwnerHint for Appointment {
    fn explicit_owner(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    fn contact_email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl OwnerHint for NewAppointment {
    fn explicit_owner(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    fn contact_email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Case-insensitive email to user id index.
///
/// When two users share an email (which the auth service should not allow,
/// but the local fallback can end up with), the first one inserted wins.
#[derive(Debug, Clone, Default)]
pub struct KnownUsers {
    by_email: HashMap<String, String>,
}

impl KnownUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut known = Self::new();
        for profile in profiles {
            known.insert(&profile.email, &profile.id);
        }
        known
    }

    pub fn insert(&mut self, email: &str, user_id: &str) {
        let key = email_key(email);
        if key.is_empty() || user_id.trim().is_empty() {
            return;
        }
        self.by_email
            .entry(key)
            .or_insert_with(|| user_id.to_string());
    }

    pub fn lookup(&self, email: &str) -> Option<&str> {
        self.by_email.get(&email_key(email)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Resolves who owns `record`.
///
/// An explicit owner id always wins and the email is then ignored. Otherwise
/// the email is looked up case-insensitively. `None` means ownership is
/// unknown and must never be matched against any user.
pub fn resolve_owner<R: OwnerHint + ?Sized>(record: &R, known: &KnownUsers) -> Option<String> {
    if let Some(owner) = record.explicit_owner().filter(|o| !o.trim().is_empty()) {
        return Some(owner.to_string());
    }

    record
        .contact_email()
        .and_then(|email| known.lookup(email))
        .map(str::to_string)
}
