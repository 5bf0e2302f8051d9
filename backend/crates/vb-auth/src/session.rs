use vb_core::{Profile, Role};

use serde::Deserialize;

/// Identity returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: AuthUser,
}

/// A created identity. `session` is present when the provider confirms
/// the account immediately instead of waiting on an email link.
#[derive(Debug, Clone)]
pub struct SignedUp {
    pub user: AuthUser,
    pub session: Option<AuthSession>,
}

/// A completed login: the auth session plus the profile it resolved to.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub session: AuthSession,
    /// `None` when the user has no profile row yet.
    pub profile: Option<Profile>,
}

impl SignedIn {
    pub fn user_id(&self) -> &str {
        &self.session.user.id
    }

    /// Missing profiles get the default role.
    pub fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.role).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

/// Fields collected by the signup form.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

/// The single response to every accepted reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetAcknowledgement {
    pub message: &'static str,
}

pub const RESET_ACKNOWLEDGEMENT: ResetAcknowledgement = ResetAcknowledgement {
    message: "If an account exists for that email, a password reset link has been sent. Please check your inbox.",
};
