//! vb-cli library
//!
//! Command definitions and the executor behind the `vb` binary.

pub mod admin_commands;
pub mod app;
pub mod appointment_commands;
pub mod auth_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod pet_commands;

#[cfg(test)]
mod tests;

pub use admin_commands::{ResetCommands, UserCommands};
pub use app::App;
pub use appointment_commands::AppointmentCommands;
pub use auth_commands::AuthCommands;
pub use cli::{Cli, Identity};
pub use commands::{Commands, FeedbackCommands};
pub use error::{CliError, CliResult};
pub use pet_commands::PetCommands;
