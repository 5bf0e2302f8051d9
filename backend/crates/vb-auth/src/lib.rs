pub mod auth_service;
pub mod error;
pub mod http_auth_service;
pub mod session;
pub mod session_facade;
pub mod timeout;
pub mod unconfigured_auth_service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use auth_service::AuthService;
pub use error::{AuthFailure, AuthResult};
pub use http_auth_service::HttpAuthService;
pub use session::{
    AuthSession, AuthUser, RESET_ACKNOWLEDGEMENT, ResetAcknowledgement, SignedIn, SignedUp,
    SignupRequest,
};
pub use session_facade::SessionFacade;
pub use timeout::with_timeout;
pub use unconfigured_auth_service::UnconfiguredAuthService;
