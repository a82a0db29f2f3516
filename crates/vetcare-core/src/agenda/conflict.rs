//! Overlap detection between a candidate appointment and the day's list.

use crate::agenda::appointment::Appointment;

/// Whether `candidate` overlaps any other appointment in `existing`.
///
/// Intervals are half-open `[start, start + duration)`: a slot ending
/// exactly when the next one begins is not a conflict. Entries sharing
/// the candidate's id are skipped so a record can be re-checked against
/// a list it already sits in.
pub fn has_conflict(candidate: &Appointment, existing: &[Appointment]) -> bool {
    let start = candidate.start_minutes();
    let end = candidate.end_minutes();

    existing
        .iter()
        .filter(|a| a.id != candidate.id)
        .any(|a| start < a.end_minutes() && end > a.start_minutes())
}
