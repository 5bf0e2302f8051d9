use crate::{AuthResult, AuthSession, SignedUp};

use async_trait::async_trait;

/// The hosted identity provider, as seen by the session facade.
///
/// Implementations make one network round trip per call and apply no
/// timeout of their own beyond the HTTP client's; the facade bounds each
/// call.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> AuthResult<SignedUp>;

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession>;

    async fn sign_out(&self, access_token: &str) -> AuthResult<()>;

    /// Ask the provider to email a recovery link pointing at `redirect_to`.
    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> AuthResult<()>;

    /// Requires the access token of an active recovery session.
    async fn update_password(&self, access_token: &str, new_password: &str) -> AuthResult<()>;
}
