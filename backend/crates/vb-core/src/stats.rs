//! Admin dashboard aggregates. Everything here is a pure fold over the
//! collections passed in.

use crate::{Appointment, AppointmentStatus, Pet};

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const UPCOMING_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_appointments: usize,
    pub scheduled_appointments: usize,
    pub completed_appointments: usize,
    pub cancelled_appointments: usize,
    pub total_pets: usize,
    pub active_owners: usize,
}

/// Order-independent; empty input yields all zeros.
///
/// Statuses outside scheduled/completed/cancelled only count toward the
/// total. Appointments without a resolved owner are not active owners.
pub fn compute_stats(appointments: &[Appointment], pets: &[Pet]) -> AdminStats {
    let mut stats = AdminStats {
        total_appointments: appointments.len(),
        total_pets: pets.len(),
        ..AdminStats::default()
    };
    let mut owners: HashSet<&str> = HashSet::new();

    for appointment in appointments {
        match appointment.status {
            AppointmentStatus::Scheduled => stats.scheduled_appointments += 1,
            AppointmentStatus::Completed => stats.completed_appointments += 1,
            AppointmentStatus::Cancelled => stats.cancelled_appointments += 1,
            _ => {}
        }

        if let Some(owner) = appointment.owner_id.as_deref().filter(|o| !o.trim().is_empty()) {
            owners.insert(owner);
        }
    }

    stats.active_owners = owners.len();
    stats
}

impl Appointment {
    /// Open and not closed, starting strictly after `now` and strictly
    /// before `now + 24h`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        if self.status.is_closed() {
            return false;
        }
        let horizon = now + Duration::hours(UPCOMING_WINDOW_HOURS);
        self.scheduled_at()
            .is_some_and(|at| at > now && at < horizon)
    }
}

/// Upcoming appointments, soonest first.
pub fn upcoming_appointments(appointments: &[Appointment], now: DateTime<Utc>) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.is_upcoming(now))
        .cloned()
        .collect();
    upcoming.sort_by_key(Appointment::scheduled_at);
    upcoming
}

/// Newest `created_at` first; rows without a timestamp sort last.
pub fn recent_appointments(appointments: &[Appointment], limit: usize) -> Vec<Appointment> {
    let mut recent = appointments.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

pub fn filter_by_status(appointments: &[Appointment], status: &AppointmentStatus) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| &a.status == status)
        .cloned()
        .collect()
}
