use crate::{
    admin_commands::{ResetCommands, UserCommands},
    appointment_commands::AppointmentCommands,
    auth_commands::AuthCommands,
    pet_commands::PetCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign up, sign in and password recovery
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Pet operations
    Pet {
        #[command(subcommand)]
        action: PetCommands,
    },

    /// Appointment operations
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },

    /// List the service catalog
    Services,

    /// Feedback on an appointment
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },

    /// Medical records for a pet
    Records {
        /// Pet ID
        pet_id: String,
    },

    /// Admin dashboard counts
    Stats,

    /// User administration (admin)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Password reset requests (admin)
    Reset {
        #[command(subcommand)]
        action: ResetCommands,
    },
}

#[derive(Subcommand)]
pub enum FeedbackCommands {
    /// Rate a visit
    Add {
        #[arg(long)]
        appointment_id: String,
        /// 1 to 5
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Show the feedback left on an appointment
    Get { appointment_id: String },
}
