/// Every entity table the data layer knows about.
///
/// The remote row store and the local fallback name some of these
/// differently: remote `profiles` are the local `users` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Profiles,
    Pets,
    Appointments,
    Services,
    Feedback,
    MedicalRecords,
}

impl Table {
    pub fn remote_name(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Pets => "pets",
            Self::Appointments => "appointments",
            Self::Services => "services",
            Self::Feedback => "feedback",
            Self::MedicalRecords => "medical_records",
        }
    }

    pub fn local_collection(&self) -> &'static str {
        match self {
            Self::Profiles => "users",
            other => other.remote_name(),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.remote_name())
    }
}
