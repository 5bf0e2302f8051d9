use crate::{AuthFailure, AuthResult, AuthService, AuthSession, SignedUp};

use async_trait::async_trait;

/// Stand-in used when no remote is configured. Every call fails with
/// [`AuthFailure::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAuthService;

#[async_trait]
impl AuthService for UnconfiguredAuthService {
    async fn sign_up(&self, _email: &str, _password: &str, _full_name: &str) -> AuthResult<SignedUp> {
        Err(AuthFailure::not_configured())
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> AuthResult<AuthSession> {
        Err(AuthFailure::not_configured())
    }

    async fn sign_out(&self, _access_token: &str) -> AuthResult<()> {
        Err(AuthFailure::not_configured())
    }

    async fn request_password_reset(&self, _email: &str, _redirect_to: &str) -> AuthResult<()> {
        Err(AuthFailure::not_configured())
    }

    async fn update_password(&self, _access_token: &str, _new_password: &str) -> AuthResult<()> {
        Err(AuthFailure::not_configured())
    }
}
