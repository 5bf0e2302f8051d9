use clap::Subcommand;

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Your appointments; --all or --status list the whole clinic (admin)
    List {
        #[arg(long)]
        all: bool,
        #[arg(long)]
        status: Option<String>,
    },
    /// Get an appointment by ID
    Get { id: String },
    /// Book an appointment. Without a signed-in user, --email identifies
    /// the owner.
    Book {
        #[arg(long)]
        service: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// e.g. "09:00 - 09:30"
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        pet_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Appointments in the next 24 hours (admin)
    Upcoming,
    /// Most recently created appointments (admin)
    Recent {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Change an appointment's status
    Status { id: String, status: String },
    /// Replace an appointment's notes; omit --notes to clear them
    Notes {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an appointment
    Delete { id: String },
}
