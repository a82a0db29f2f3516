//! Time-of-day parsing and minute arithmetic.
//!
//! The agenda works on a single day, so every time value is a
//! [`NaiveTime`] and every comparison happens in whole minutes from
//! midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::ScheduleError;

/// Parse a strict "HH:mm" time-of-day string.
///
/// # Errors
/// Returns [`ScheduleError::InvalidTimeFormat`] when the input does not
/// parse. Callers must propagate the error; a bad time is never treated
/// as midnight.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(input, "%H:%M").map_err(|source| {
        ScheduleError::InvalidTimeFormat {
            input: input.to_string(),
            source,
        }
    })
}

/// Minutes elapsed since midnight, the agenda's sort key.
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        let t = parse_time_of_day("09:30").unwrap();
        assert_eq!(minutes_from_midnight(t), 9 * 60 + 30);

        let midnight = parse_time_of_day("00:00").unwrap();
        assert_eq!(minutes_from_midnight(midnight), 0);

        let late = parse_time_of_day("23:59").unwrap();
        assert_eq!(minutes_from_midnight(late), 23 * 60 + 59);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "abc", "25:00", "09:75", "09:30:00", "9h30"] {
            let err = parse_time_of_day(input).unwrap_err();
            assert!(
                matches!(err, ScheduleError::InvalidTimeFormat { .. }),
                "expected InvalidTimeFormat for {input:?}"
            );
        }
    }
}
