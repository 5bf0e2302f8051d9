use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,
    /// Change a user's role (user, vet, admin)
    Role { id: String, role: String },
    /// Delete a user (local backend only)
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ResetCommands {
    /// List reset requests, newest first
    List {
        /// Case-insensitive email substring
        #[arg(long)]
        email: Option<String>,
    },
    /// Mark a reset request as handled
    Complete { id: String },
}
