use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Check credentials and show the resolved role
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "VB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and its profile
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        full_name: String,
    },
    /// Request a password reset email
    RequestReset {
        #[arg(long)]
        email: String,
    },
    /// Set a new password from a recovery link's access token
    CompleteReset {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
}
