mod timeout;
mod validation;

use crate::{
    AuthFailure, AuthResult, AuthService, AuthSession, AuthUser, SessionFacade, SignedUp,
};

use vb_config::AuthConfig;
use vb_db::Backend;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub(crate) const PASSWORD: &str = "secret1";
pub(crate) const REDIRECT: &str = "http://localhost:5173/reset-password";

/// Scripted identity provider. Emails in `accounts` exist; everything else
/// is unknown. With `hang` set, every call stays pending forever.
#[derive(Default)]
pub(crate) struct FakeAuth {
    pub accounts: Vec<String>,
    pub hang: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeAuth {
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self {
            accounts: accounts.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn knows(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a == email)
    }
}

pub(crate) fn user_id_for(email: &str) -> String {
    format!("id-{email}")
}

#[async_trait]
impl AuthService for FakeAuth {
    async fn sign_up(&self, email: &str, _password: &str, _full_name: &str) -> AuthResult<SignedUp> {
        self.record("sign_up");
        if self.hang {
            return std::future::pending().await;
        }
        Ok(SignedUp {
            user: AuthUser {
                id: user_id_for(email),
                email: Some(email.to_string()),
            },
            session: None,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.record("sign_in");
        if self.hang {
            return std::future::pending().await;
        }
        if !self.knows(email) || password != PASSWORD {
            return Err(AuthFailure::invalid_credentials());
        }
        Ok(AuthSession {
            access_token: format!("token-{email}"),
            refresh_token: None,
            expires_in: Some(3600),
            user: AuthUser {
                id: user_id_for(email),
                email: Some(email.to_string()),
            },
        })
    }

    async fn sign_out(&self, _access_token: &str) -> AuthResult<()> {
        self.record("sign_out");
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, _redirect_to: &str) -> AuthResult<()> {
        self.record("request_password_reset");
        if self.hang {
            return std::future::pending().await;
        }
        if self.knows(email) {
            Ok(())
        } else {
            Err(AuthFailure::rejected(
                "user_not_found".to_string(),
                "User not found".to_string(),
            ))
        }
    }

    async fn update_password(&self, _access_token: &str, _new_password: &str) -> AuthResult<()> {
        self.record("update_password");
        Ok(())
    }
}

pub(crate) fn facade(auth: Arc<FakeAuth>, backend: &Backend) -> SessionFacade {
    SessionFacade::new(auth, backend, AuthConfig::default(), REDIRECT.to_string())
}
