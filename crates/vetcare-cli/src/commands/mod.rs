pub mod agenda;
pub mod inventory;
pub mod patients;
