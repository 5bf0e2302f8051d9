//! Column maps for every entity that crosses the storage boundary.

use crate::normalize::field_mapping::{EntityShape, FieldMapping, NestedShape};

const TIMESTAMPS: [FieldMapping; 2] = [
    FieldMapping::new("created_at", "createdAt"),
    FieldMapping::new("updated_at", "updatedAt"),
];

pub static PROFILE: EntityShape = EntityShape {
    entity: "profile",
    fields: &[
        FieldMapping::new("id", "id"),
        FieldMapping::new("email", "email"),
        FieldMapping::with_aliases("full_name", "fullName", &["name"]),
        FieldMapping::new("phone_number", "phone"),
        FieldMapping::new("role", "role"),
        TIMESTAMPS[0],
        TIMESTAMPS[1],
    ],
    nested: &[],
};

pub static PET: EntityShape = EntityShape {
    entity: "pet",
    fields: &[
        FieldMapping::new("owner_id", "ownerId"),
        FieldMapping::new("name", "name"),
        FieldMapping::new("species", "species"),
        FieldMapping::new("breed", "breed"),
        FieldMapping::new("gender", "gender"),
        FieldMapping::new("weight", "weight"),
        FieldMapping::new("birth_date", "birthDate"),
        FieldMapping::new("medical_history", "medicalHistory"),
        TIMESTAMPS[0],
        TIMESTAMPS[1],
    ],
    nested: &[NestedShape {
        key: "owner",
        shape: &PROFILE,
    }],
};

pub static APPOINTMENT: EntityShape = EntityShape {
    entity: "appointment",
    fields: &[
        FieldMapping::new("pet_id", "petId"),
        FieldMapping::new("owner_id", "ownerId"),
        FieldMapping::with_aliases("service_type", "serviceType", &["service"]),
        FieldMapping::with_aliases("appointment_date", "appointmentDate", &["date"]),
        FieldMapping::with_aliases("appointment_time", "timeSlot", &["time_slot", "time"]),
        FieldMapping::new("status", "status"),
        FieldMapping::with_aliases("notes", "notes", &["user_notes", "additional_info"]),
        FieldMapping::new("vet_id", "vetId"),
        FieldMapping::new("email", "email"),
        FieldMapping::new("phone", "phone"),
        FieldMapping::new("pet_name", "petName"),
        FieldMapping::new("pet_species", "petSpecies"),
        FieldMapping::new("owner_name", "ownerName"),
        TIMESTAMPS[0],
        TIMESTAMPS[1],
    ],
    nested: &[
        NestedShape {
            key: "pet",
            shape: &PET,
        },
        NestedShape {
            key: "vet",
            shape: &PROFILE,
        },
        NestedShape {
            key: "owner",
            shape: &PROFILE,
        },
    ],
};

pub static SERVICE: EntityShape = EntityShape {
    entity: "service",
    fields: &[
        FieldMapping::new("name", "name"),
        FieldMapping::new("description", "description"),
        FieldMapping::new("price", "price"),
        FieldMapping::new("duration", "duration"),
    ],
    nested: &[],
};

pub static FEEDBACK: EntityShape = EntityShape {
    entity: "feedback",
    fields: &[
        FieldMapping::new("user_id", "userId"),
        FieldMapping::new("appointment_id", "appointmentId"),
        FieldMapping::new("rating", "rating"),
        FieldMapping::new("comment", "comment"),
        TIMESTAMPS[0],
    ],
    nested: &[],
};

pub static MEDICAL_RECORD: EntityShape = EntityShape {
    entity: "medical record",
    fields: &[
        FieldMapping::new("pet_id", "petId"),
        FieldMapping::new("appointment_id", "appointmentId"),
        FieldMapping::new("diagnosis", "diagnosis"),
        FieldMapping::new("treatment", "treatment"),
        FieldMapping::new("prescription", "prescription"),
        FieldMapping::new("notes", "notes"),
        FieldMapping::new("vet_id", "vetId"),
        TIMESTAMPS[0],
    ],
    nested: &[NestedShape {
        key: "vet",
        shape: &PROFILE,
    }],
};
