
use crate::{App, Cli, Commands, Identity};

use vb_auth::{SessionFacade, UnconfiguredAuthService};
use vb_config::AuthConfig;
use vb_core::{NewProfile, Role};
use vb_db::{Backend, ProfileRepository};

use std::sync::Arc;

use clap::Parser;

/// App over an in-memory local backend with no auth service.
pub(crate) fn local_app() -> (App, Backend) {
    let backend = Backend::in_memory();
    let facade = SessionFacade::new(
        Arc::new(UnconfiguredAuthService),
        &backend,
        AuthConfig::default(),
        "http://localhost:5173/reset-password".to_string(),
    );
    (App::new(backend.clone(), facade), backend)
}

pub(crate) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("vb").chain(args.iter().copied())).unwrap()
}

pub(crate) fn command(args: &[&str]) -> Commands {
    parse(args).command
}

pub(crate) fn as_user(user_id: &str) -> Identity {
    Identity {
        user_id: Some(user_id.to_string()),
        ..Identity::default()
    }
}

pub(crate) async fn seed_profile(backend: &Backend, id: &str, email: &str, role: Role) {
    let profile = NewProfile {
        role,
        ..NewProfile::new(id.to_string(), email.to_string(), format!("User {id}"))
    };
    ProfileRepository::new(backend.store.clone())
        .create(&profile)
        .await
        .unwrap();
}
