//! Service catalogue: the closed set of clinic services, default
//! appointment durations, and display colors.
//!
//! Both enums are deliberately closed so the duration table is total by
//! construction; an unknown service is unrepresentable rather than a
//! runtime lookup miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Whether the visit is a first consultation or a return visit.
///
/// New patients get the longer slot of each service pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatientCategory {
    NewPatient,
    FollowUp,
}

impl PatientCategory {
    pub const ALL: [PatientCategory; 2] = [Self::NewPatient, Self::FollowUp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewPatient => "new-patient",
            Self::FollowUp => "follow-up",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewPatient => "New Patient",
            Self::FollowUp => "Follow-up",
        }
    }

    /// Badge color used by the presentation layer.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::NewPatient => "purple",
            Self::FollowUp => "green",
        }
    }
}

impl fmt::Display for PatientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PatientCategory {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ScheduleError::InvalidPatientCategory(s.to_string()))
    }
}

/// The fixed kinds of veterinary service the clinic offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    GeneralConsult,
    PreventiveMedicine,
    Surgery,
    Diagnostics,
    Dentistry,
    Hospitalization,
    Emergency,
    Grooming,
    ExoticPets,
    Checkup,
    Imaging,
    Dermatology,
    GeriatricCare,
}

impl ServiceType {
    pub const ALL: [ServiceType; 13] = [
        Self::GeneralConsult,
        Self::PreventiveMedicine,
        Self::Surgery,
        Self::Diagnostics,
        Self::Dentistry,
        Self::Hospitalization,
        Self::Emergency,
        Self::Grooming,
        Self::ExoticPets,
        Self::Checkup,
        Self::Imaging,
        Self::Dermatology,
        Self::GeriatricCare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralConsult => "general-consult",
            Self::PreventiveMedicine => "preventive-medicine",
            Self::Surgery => "surgery",
            Self::Diagnostics => "diagnostics",
            Self::Dentistry => "dentistry",
            Self::Hospitalization => "hospitalization",
            Self::Emergency => "emergency",
            Self::Grooming => "grooming",
            Self::ExoticPets => "exotic-pets",
            Self::Checkup => "checkup",
            Self::Imaging => "imaging",
            Self::Dermatology => "dermatology",
            Self::GeriatricCare => "geriatric-care",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GeneralConsult => "General Consult",
            Self::PreventiveMedicine => "Preventive Medicine",
            Self::Surgery => "Surgery",
            Self::Diagnostics => "Diagnostics",
            Self::Dentistry => "Dentistry",
            Self::Hospitalization => "Hospitalization",
            Self::Emergency => "24/7 Emergency",
            Self::Grooming => "Grooming",
            Self::ExoticPets => "Exotic Pet Care",
            Self::Checkup => "Checkup",
            Self::Imaging => "Imaging",
            Self::Dermatology => "Dermatology",
            Self::GeriatricCare => "Geriatric Care",
        }
    }

    /// Badge color used by the presentation layer.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::GeneralConsult => "blue",
            Self::PreventiveMedicine => "teal",
            Self::Surgery => "rose",
            Self::Diagnostics => "amber",
            Self::Dentistry => "cyan",
            Self::Hospitalization => "red",
            Self::Emergency => "red",
            Self::Grooming => "pink",
            Self::ExoticPets => "purple",
            Self::Checkup => "green",
            Self::Imaging => "indigo",
            Self::Dermatology => "orange",
            Self::GeriatricCare => "slate",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| ScheduleError::InvalidServiceType(s.to_string()))
    }
}

/// Default duration in minutes for a service and patient category.
///
/// Total over the 13x2 domain: every pair has a fixed positive entry,
/// fixed at booking time and never recomputed afterward.
pub fn resolve_duration(service: ServiceType, category: PatientCategory) -> u32 {
    let (new_patient, follow_up) = match service {
        ServiceType::GeneralConsult => (60, 30),
        ServiceType::PreventiveMedicine => (30, 20),
        ServiceType::Surgery => (120, 90),
        ServiceType::Diagnostics => (60, 45),
        ServiceType::Dentistry => (45, 30),
        ServiceType::Hospitalization => (90, 60),
        ServiceType::Emergency => (60, 30),
        ServiceType::Grooming => (30, 25),
        ServiceType::ExoticPets => (60, 40),
        ServiceType::Checkup => (45, 30),
        ServiceType::Imaging => (50, 40),
        ServiceType::Dermatology => (45, 30),
        ServiceType::GeriatricCare => (60, 40),
    };

    match category {
        PatientCategory::NewPatient => new_patient,
        PatientCategory::FollowUp => follow_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_a_positive_duration() {
        for service in ServiceType::ALL {
            for category in PatientCategory::ALL {
                assert!(
                    resolve_duration(service, category) > 0,
                    "zero duration for {service:?}/{category:?}"
                );
            }
        }
    }

    #[test]
    fn new_patient_slots_are_at_least_as_long() {
        for service in ServiceType::ALL {
            let new_patient = resolve_duration(service, PatientCategory::NewPatient);
            let follow_up = resolve_duration(service, PatientCategory::FollowUp);
            assert!(new_patient >= follow_up, "{service:?}");
        }
    }

    #[test]
    fn spot_check_table_values() {
        assert_eq!(
            resolve_duration(ServiceType::GeneralConsult, PatientCategory::NewPatient),
            60
        );
        assert_eq!(
            resolve_duration(ServiceType::GeneralConsult, PatientCategory::FollowUp),
            30
        );
        assert_eq!(
            resolve_duration(ServiceType::Surgery, PatientCategory::NewPatient),
            120
        );
        assert_eq!(
            resolve_duration(ServiceType::Grooming, PatientCategory::FollowUp),
            25
        );
        assert_eq!(
            resolve_duration(ServiceType::Imaging, PatientCategory::NewPatient),
            50
        );
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for service in ServiceType::ALL {
            assert_eq!(service.as_str().parse::<ServiceType>().unwrap(), service);
        }
        for category in PatientCategory::ALL {
            assert_eq!(
                category.as_str().parse::<PatientCategory>().unwrap(),
                category
            );
        }
        assert!("open-heart".parse::<ServiceType>().is_err());
        assert!("walk-in".parse::<PatientCategory>().is_err());
    }
}
