//! Login, signup, logout and password recovery for one process.
//!
//! Every network-bound call is bounded by [`with_timeout`], and every
//! expected failure comes back as an [`AuthFailure`]. Session state only
//! changes after a call has fully completed.

use crate::timeout::with_timeout;
use crate::validation::{validate_email, validate_new_password};
use crate::{
    AuthFailure, AuthResult, AuthService, HttpAuthService, RESET_ACKNOWLEDGEMENT,
    ResetAcknowledgement, SignedIn, SignupRequest, UnconfiguredAuthService,
};

use vb_config::{AuthConfig, Config};
use vb_core::NewProfile;
use vb_db::{Backend, PasswordResetRepository, ProfileRepository, SessionToken};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::RwLock;

pub struct SessionFacade {
    auth: Arc<dyn AuthService>,
    profiles: ProfileRepository,
    resets: PasswordResetRepository,
    session_token: Option<Arc<dyn SessionToken>>,
    config: AuthConfig,
    reset_redirect: String,
    current: RwLock<Option<SignedIn>>,
}

impl SessionFacade {
    pub fn new(
        auth: Arc<dyn AuthService>,
        backend: &Backend,
        config: AuthConfig,
        reset_redirect: String,
    ) -> Self {
        Self {
            auth,
            profiles: ProfileRepository::new(backend.store.clone()),
            resets: PasswordResetRepository::new(backend.local.clone()),
            session_token: backend.session.clone(),
            config,
            reset_redirect,
            current: RwLock::new(None),
        }
    }

    /// Talks to the hosted auth service when a remote is configured,
    /// otherwise every auth call reports `NotConfigured`.
    pub fn from_config(config: &Config, backend: &Backend) -> AuthResult<Self> {
        let auth: Arc<dyn AuthService> = match config.remote.credentials() {
            Some((url, anon_key)) => Arc::new(HttpAuthService::new(
                url,
                anon_key,
                Duration::from_secs(config.remote.request_timeout_secs),
            )?),
            None => {
                info!("No remote configured; authentication is disabled");
                Arc::new(UnconfiguredAuthService)
            }
        };
        Ok(Self::new(
            auth,
            backend,
            config.auth.clone(),
            config.reset_redirect_url(),
        ))
    }

    pub async fn current(&self) -> Option<SignedIn> {
        self.current.read().await.clone()
    }

    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(SignedIn::is_admin)
    }

    /// Sign in, then load the profile to learn the role. A missing or
    /// unreadable profile still signs the user in with the default role.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<SignedIn> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(AuthFailure::validation("Password is required."));
        }

        let email = email.trim();
        let session = with_timeout(
            "login",
            self.config.login_timeout(),
            self.auth.sign_in(email, password),
        )
        .await?;

        self.set_token(Some(session.access_token.clone())).await;

        let profile = match self.profiles.find_by_id(&session.user.id).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                warn!("No profile for user {}; using default role", session.user.id);
                None
            }
            Err(e) => {
                warn!("Failed to load profile for {}: {e}", session.user.id);
                None
            }
        };

        let signed_in = SignedIn { session, profile };
        info!(
            "User {} signed in (role: {})",
            signed_in.user_id(),
            signed_in.role().as_str()
        );
        *self.current.write().await = Some(signed_in.clone());
        Ok(signed_in)
    }

    /// Create the auth identity, then its profile row.
    ///
    /// When the profile write fails the identity is left in place and the
    /// whole signup reports [`AuthFailure::ProfileCreation`].
    pub async fn signup(&self, request: &SignupRequest) -> AuthResult<String> {
        validate_email(&request.email)?;
        if request.full_name.trim().is_empty() {
            return Err(AuthFailure::validation("Full name is required."));
        }
        validate_new_password(
            &request.password,
            &request.confirm_password,
            self.config.min_password_length,
        )?;

        let email = request.email.trim();
        let full_name = request.full_name.trim();
        let signed_up = with_timeout(
            "signup",
            self.config.signup_timeout(),
            self.auth.sign_up(email, &request.password, full_name),
        )
        .await?;
        let user = signed_up.user;

        // The profile row is written as the new user when the provider
        // handed back a session, then the caller's own token is restored.
        let new_session = signed_up.session.is_some();
        if let Some(session) = signed_up.session {
            self.set_token(Some(session.access_token)).await;
        }
        let profile = NewProfile::new(user.id.clone(), email.to_string(), full_name.to_string());
        let created = self.profiles.create(&profile).await;
        if new_session {
            let previous = self
                .current
                .read()
                .await
                .as_ref()
                .map(|s| s.session.access_token.clone());
            self.set_token(previous).await;
        }

        if let Err(e) = created {
            error!(
                "Auth identity {} was created but its profile was not: {e}. The identity is not rolled back",
                user.id
            );
            return Err(AuthFailure::profile_creation(user.id, e.to_string()));
        }

        info!("Signed up user {}", user.id);
        Ok(user.id)
    }

    /// Local session state is cleared even when the remote sign-out fails.
    pub async fn logout(&self) -> AuthResult<()> {
        let Some(signed_in) = self.current.write().await.take() else {
            debug!("Logout with no active session");
            return Ok(());
        };
        self.set_token(None).await;

        let result = with_timeout(
            "logout",
            self.config.request_timeout(),
            self.auth.sign_out(&signed_in.session.access_token),
        )
        .await;

        match &result {
            Ok(()) => info!("User {} signed out", signed_in.user_id()),
            Err(e) => warn!("Remote sign-out for {} failed: {e}", signed_in.user_id()),
        }
        result
    }

    /// Returns the same acknowledgement whether or not `email` has an
    /// account. Only transport failures (network, timeout) are reported.
    pub async fn request_password_reset(&self, email: &str) -> AuthResult<ResetAcknowledgement> {
        validate_email(email)?;
        let email = email.trim();

        if let Err(e) = self.resets.record(email) {
            warn!("Failed to record password reset request: {e}");
        }

        let result = with_timeout(
            "password reset request",
            self.config.request_timeout(),
            self.auth.request_password_reset(email, &self.reset_redirect),
        )
        .await;

        match result {
            Ok(()) => Ok(RESET_ACKNOWLEDGEMENT),
            Err(AuthFailure::Rejected { code, message, .. }) => {
                debug!("Reset request rejected upstream: {message} ({code})");
                Ok(RESET_ACKNOWLEDGEMENT)
            }
            Err(AuthFailure::NotConfigured { .. }) => {
                info!("No auth service; reset request left for an administrator");
                Ok(RESET_ACKNOWLEDGEMENT)
            }
            Err(e) => Err(e),
        }
    }

    /// Set a new password using the access token of a recovery session.
    pub async fn complete_password_reset(
        &self,
        recovery_token: &str,
        new_password: &str,
        confirmation: &str,
    ) -> AuthResult<()> {
        validate_new_password(new_password, confirmation, self.config.min_password_length)?;
        if recovery_token.trim().is_empty() {
            return Err(AuthFailure::no_session());
        }

        with_timeout(
            "password update",
            self.config.request_timeout(),
            self.auth.update_password(recovery_token.trim(), new_password),
        )
        .await?;

        info!("Password updated");
        Ok(())
    }

    async fn set_token(&self, token: Option<String>) {
        if let Some(session) = &self.session_token {
            session.set_access_token(token).await;
        }
    }
}
