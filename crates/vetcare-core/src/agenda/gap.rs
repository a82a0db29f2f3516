//! Idle-time detection between consecutive agenda slots.
//!
//! The agenda view walks the sorted list and flags a free-slot marker
//! wherever at least an hour sits between one appointment's end and the
//! next one's start.

use chrono::NaiveTime;

use crate::agenda::appointment::Appointment;
use crate::time::minutes_from_midnight;

/// Minimum idle minutes before a slot counts as free time worth flagging.
pub const GAP_THRESHOLD_MINUTES: i64 = 60;

/// Whether at least an hour of idle time precedes `current`.
///
/// The first slot of the day never reports a gap. Intended to be called
/// once per adjacent pair of the sorted list, in display order; the
/// result depends only on the two arguments.
pub fn has_gap_before(current: NaiveTime, previous: Option<&Appointment>) -> bool {
    match previous {
        None => false,
        Some(prev) => minutes_from_midnight(current) - prev.end_minutes() >= GAP_THRESHOLD_MINUTES,
    }
}
