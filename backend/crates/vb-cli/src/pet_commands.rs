use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PetCommands {
    /// List your pets, or every pet with --all (admin)
    List {
        #[arg(long)]
        all: bool,
    },
    /// Get a pet by ID
    Get { id: String },
    /// Register a pet you own
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: String,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        weight: Option<f64>,
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        #[arg(long)]
        medical_history: Option<String>,
    },
    /// Update a pet; only the given fields change
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        species: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        #[arg(long)]
        medical_history: Option<String>,
    },
    /// Delete a pet
    Delete { id: String },
    /// Describe a pet's age
    Age {
        id: String,
        /// Reference date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
}
