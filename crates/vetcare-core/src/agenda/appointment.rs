//! Appointment records and the pending-booking form payload.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::agenda::service::{resolve_duration, PatientCategory, ServiceType};
use crate::error::ScheduleError;
use crate::time::minutes_from_midnight;

/// A scheduled visit on the single-day agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub pet_name: String,
    pub owner_name: String,
    pub patient_category: PatientCategory,
    pub service: ServiceType,
    /// Overlap flag computed once when the appointment was booked,
    /// against the list as it stood at that instant. Later bookings do
    /// not rewrite it, so the flag can go stale.
    #[serde(default)]
    pub conflict: bool,
}

impl Appointment {
    /// Start of the slot in minutes from midnight.
    pub fn start_minutes(&self) -> i64 {
        minutes_from_midnight(self.start_time)
    }

    /// Exclusive end of the half-open `[start, end)` slot.
    pub fn end_minutes(&self) -> i64 {
        self.start_minutes() + i64::from(self.duration_minutes)
    }
}

/// The pending-appointment form: everything the caller supplies.
///
/// Id, duration, and the conflict flag are filled in by the engine at
/// booking time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub pet_name: String,
    pub owner_name: String,
    pub start_time: NaiveTime,
    pub patient_category: PatientCategory,
    pub service: ServiceType,
}

impl AppointmentRequest {
    /// Check the two display fields are non-empty. Nothing else is
    /// validated.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.pet_name.trim().is_empty() {
            return Err(ScheduleError::EmptyField { field: "pet_name" });
        }
        if self.owner_name.trim().is_empty() {
            return Err(ScheduleError::EmptyField { field: "owner_name" });
        }
        Ok(())
    }

    /// Materialize an appointment with a fresh id and the duration
    /// resolved from the service table. The conflict flag starts false;
    /// booking sets it.
    pub fn into_appointment(self) -> Appointment {
        let duration_minutes = resolve_duration(self.service, self.patient_category);
        Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            start_time: self.start_time,
            duration_minutes,
            pet_name: self.pet_name,
            owner_name: self.owner_name,
            patient_category: self.patient_category,
            service: self.service,
            conflict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pet: &str, owner: &str) -> AppointmentRequest {
        AppointmentRequest {
            pet_name: pet.to_string(),
            owner_name: owner.to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            patient_category: PatientCategory::NewPatient,
            service: ServiceType::Surgery,
        }
    }

    #[test]
    fn interval_is_half_open_in_minutes() {
        let appointment = request("Max", "Juan Pérez").into_appointment();
        assert_eq!(appointment.start_minutes(), 540);
        assert_eq!(appointment.end_minutes(), 540 + 120);
    }

    #[test]
    fn duration_comes_from_the_service_table() {
        let appointment = request("Max", "Juan Pérez").into_appointment();
        assert_eq!(appointment.duration_minutes, 120);
        assert!(!appointment.conflict);
        assert!(!appointment.id.is_empty());
    }

    #[test]
    fn blank_display_fields_are_rejected() {
        assert!(matches!(
            request("", "Juan Pérez").validate(),
            Err(ScheduleError::EmptyField { field: "pet_name" })
        ));
        assert!(matches!(
            request("Max", "   ").validate(),
            Err(ScheduleError::EmptyField { field: "owner_name" })
        ));
        assert!(request("Max", "Juan Pérez").validate().is_ok());
    }

    #[test]
    fn appointment_serializes_round_trip() {
        let appointment = request("Max", "Juan Pérez").into_appointment();
        let json = serde_json::to_string(&appointment).unwrap();
        let decoded: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, appointment.id);
        assert_eq!(decoded.start_time, appointment.start_time);
        assert_eq!(decoded.service, appointment.service);
    }
}
