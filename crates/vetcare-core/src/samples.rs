//! Hardcoded demo data.
//!
//! The dashboard is a demo with in-memory state only, so every widget
//! seeds from these arrays. The one pre-flagged conflict (Rocky at 14:30
//! inside Luna's 14:00 diagnostics slot) is part of the demo script.

use chrono::NaiveTime;

use crate::agenda::{Appointment, PatientCategory, ServiceType};
use crate::inventory::{Medication, StockStatus};
use crate::patients::Patient;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("sample times are valid")
}

fn appointment(
    id: &str,
    start_time: NaiveTime,
    duration_minutes: u32,
    pet_name: &str,
    owner_name: &str,
    patient_category: PatientCategory,
    service: ServiceType,
    conflict: bool,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        start_time,
        duration_minutes,
        pet_name: pet_name.to_string(),
        owner_name: owner_name.to_string(),
        patient_category,
        service,
        conflict,
    }
}

/// The demo day's agenda, already sorted by start time.
pub fn sample_appointments() -> Vec<Appointment> {
    use PatientCategory::{FollowUp, NewPatient};

    vec![
        appointment(
            "1",
            at(9, 0),
            30,
            "Max",
            "Juan Pérez",
            FollowUp,
            ServiceType::GeneralConsult,
            false,
        ),
        appointment(
            "2",
            at(10, 0),
            20,
            "Bella",
            "María González",
            FollowUp,
            ServiceType::PreventiveMedicine,
            false,
        ),
        appointment(
            "3",
            at(11, 0),
            90,
            "Charlie",
            "Carlos Rodríguez",
            NewPatient,
            ServiceType::Surgery,
            false,
        ),
        appointment(
            "4",
            at(14, 0),
            45,
            "Luna",
            "Ana Martínez",
            NewPatient,
            ServiceType::Diagnostics,
            false,
        ),
        appointment(
            "5",
            at(14, 30),
            30,
            "Rocky",
            "Pedro Sánchez",
            FollowUp,
            ServiceType::Dentistry,
            true,
        ),
        appointment(
            "6",
            at(16, 0),
            40,
            "Daisy",
            "Laura López",
            FollowUp,
            ServiceType::Imaging,
            false,
        ),
        appointment(
            "7",
            at(17, 0),
            25,
            "Milo",
            "Roberto Torres",
            FollowUp,
            ServiceType::Grooming,
            false,
        ),
        appointment(
            "8",
            at(18, 0),
            50,
            "Kiwi",
            "Sofia Vargas",
            NewPatient,
            ServiceType::ExoticPets,
            false,
        ),
    ]
}

/// The demo patient charts.
pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            pet_name: "Max".to_string(),
            breed: "Golden Retriever".to_string(),
            age: "5 years".to_string(),
            weight: "32 kg".to_string(),
            allergies: vec!["Penicillin".to_string(), "Chicken".to_string()],
            last_lab_result: "Normal CBC, slightly elevated liver enzymes".to_string(),
            lab_date: "Jan 15 2026".to_string(),
        },
        Patient {
            id: "2".to_string(),
            pet_name: "Bella".to_string(),
            breed: "Persian Cat".to_string(),
            age: "3 years".to_string(),
            weight: "4.5 kg".to_string(),
            allergies: vec!["Dairy".to_string()],
            last_lab_result: "Normal kidney function, normal urinalysis".to_string(),
            lab_date: "Jan 28 2026".to_string(),
        },
        Patient {
            id: "3".to_string(),
            pet_name: "Charlie".to_string(),
            breed: "Beagle".to_string(),
            age: "7 years".to_string(),
            weight: "12 kg".to_string(),
            allergies: Vec::new(),
            last_lab_result: "Annual checkup - all values within normal range".to_string(),
            lab_date: "Dec 20 2025".to_string(),
        },
    ]
}

/// The demo medication shelf.
pub fn sample_inventory() -> Vec<Medication> {
    fn row(
        id: &str,
        name: &str,
        barcode_id: &str,
        shelf_location: &str,
        expiration_date: &str,
        status: StockStatus,
        quantity: u32,
    ) -> Medication {
        Medication {
            id: id.to_string(),
            name: name.to_string(),
            barcode_id: barcode_id.to_string(),
            shelf_location: shelf_location.to_string(),
            expiration_date: expiration_date.to_string(),
            status,
            quantity,
        }
    }

    vec![
        row(
            "1",
            "Amoxicillin 500mg",
            "MED-8472651",
            "Shelf A2",
            "Dec 2026",
            StockStatus::InStock,
            120,
        ),
        row(
            "2",
            "Carprofen 100mg",
            "MED-3829456",
            "Shelf B1",
            "Mar 2026",
            StockStatus::LowStock,
            8,
        ),
        row(
            "3",
            "Prednisone 20mg",
            "MED-5639182",
            "Shelf A3",
            "Aug 2026",
            StockStatus::InStock,
            75,
        ),
        row(
            "4",
            "Metronidazole 250mg",
            "MED-9284730",
            "Shelf C2",
            "Jan 2026",
            StockStatus::Expired,
            42,
        ),
        row(
            "5",
            "Gabapentin 300mg",
            "MED-7419263",
            "Shelf B3",
            "May 2026",
            StockStatus::LowStock,
            12,
        ),
        row(
            "6",
            "Meloxicam 1.5mg/ml",
            "MED-1937485",
            "Shelf A1",
            "Nov 2026",
            StockStatus::InStock,
            95,
        ),
        row(
            "7",
            "Doxycycline 100mg",
            "MED-4827361",
            "Shelf C1",
            "Feb 2026",
            StockStatus::Expired,
            18,
        ),
    ]
}
