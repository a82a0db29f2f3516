//! The appointment scheduling engine.
//!
//! Pure transformations over a single-day, single-resource appointment
//! list owned by the caller:
//! - Duration resolution from the closed service catalogue
//! - Half-open interval conflict detection at booking time
//! - Free-slot (gap) detection between adjacent appointments
//! - Functional sorted insertion
//!
//! The engine holds no state of its own; the presentation layer owns
//! the list and passes it in.

mod appointment;
mod conflict;
mod gap;
mod service;

pub use appointment::{Appointment, AppointmentRequest};
pub use conflict::has_conflict;
pub use gap::{has_gap_before, GAP_THRESHOLD_MINUTES};
pub use service::{resolve_duration, PatientCategory, ServiceType};

use crate::error::ScheduleError;

/// Insert into a copy of `list`, keeping it sorted ascending by start
/// time.
///
/// The sort is stable and the new appointment is appended before
/// sorting, so ties on start time keep insertion order, with the new
/// record after existing equals. `list` itself is untouched; callers
/// can keep prior versions around.
pub fn insert_sorted(list: &[Appointment], new_appointment: Appointment) -> Vec<Appointment> {
    let mut updated = list.to_vec();
    updated.push(new_appointment);
    updated.sort_by_key(Appointment::start_minutes);
    updated
}

/// Book a pending request against the current day.
///
/// Resolves the duration from the service table, flags conflicts against
/// the list as it stands at this instant, and returns the re-sorted list
/// with the new appointment in place. Conflict flags on earlier entries
/// are left as they were.
///
/// # Errors
/// Returns [`ScheduleError::EmptyField`] when the pet or owner name is
/// blank.
pub fn book_appointment(
    existing: &[Appointment],
    request: AppointmentRequest,
) -> Result<Vec<Appointment>, ScheduleError> {
    request.validate()?;

    let mut appointment = request.into_appointment();
    appointment.conflict = has_conflict(&appointment, existing);

    Ok(insert_sorted(existing, appointment))
}
