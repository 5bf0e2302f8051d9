use crate::commands::Commands;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(name = "vb")]
#[command(about = "Veterinary clinic bookings: pets, appointments and accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub identity: Identity,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log at debug level regardless of config
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Who the command runs as. Credentials take precedence over `--user-id`.
#[derive(Args, Debug, Clone, Default)]
pub struct Identity {
    /// Act as this user id (role is read from the user's profile)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Sign in with this email before running the command
    #[arg(long, global = true, requires = "password")]
    pub email: Option<String>,

    #[arg(long, global = true, env = "VB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
