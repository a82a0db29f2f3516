//! # VetCare Core Library
//!
//! Core business logic for the VetCare clinic dashboard. The CLI binary
//! is a thin presentation layer over this crate; the library itself
//! holds no mutable state and performs no IO.
//!
//! ## Key Components
//!
//! - **Agenda**: the appointment scheduling engine -- duration
//!   resolution over the closed service catalogue, half-open interval
//!   conflict detection, free-slot gap detection, and functional sorted
//!   insertion into the caller-owned day list
//! - **Patients**: quick-access chart summaries with name/breed search
//! - **Inventory**: medication stock rows with per-status tallies
//! - **Samples**: the hardcoded demo arrays every widget seeds from

pub mod agenda;
pub mod error;
pub mod inventory;
pub mod patients;
pub mod samples;
pub mod time;

pub use agenda::{
    book_appointment, has_conflict, has_gap_before, insert_sorted, resolve_duration, Appointment,
    AppointmentRequest, PatientCategory, ServiceType, GAP_THRESHOLD_MINUTES,
};
pub use error::{CoreError, Result, ScheduleError};
pub use inventory::{summarize, Medication, StockStatus, StockSummary};
pub use patients::{filter_patients, Patient};
pub use time::{minutes_from_midnight, parse_time_of_day};
