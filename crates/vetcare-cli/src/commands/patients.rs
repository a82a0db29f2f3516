use clap::Subcommand;
use vetcare_core::patients::{filter_patients, Patient};
use vetcare_core::samples;

#[derive(Subcommand)]
pub enum PatientsAction {
    /// List all patient charts
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search by pet name or breed
    Search {
        /// Case-insensitive substring query
        query: String,
    },
    /// Show one patient chart in full
    Show {
        /// Pet name
        pet: String,
    },
}

pub fn run(action: PatientsAction) -> Result<(), Box<dyn std::error::Error>> {
    let charts = samples::sample_patients();

    match action {
        PatientsAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&charts)?);
            } else {
                for patient in &charts {
                    println!("{} - {} ({}, {})", patient.pet_name, patient.breed, patient.age, patient.weight);
                }
            }
        }
        PatientsAction::Search { query } => {
            let hits = filter_patients(&charts, &query);
            if hits.is_empty() {
                println!("no patients match '{query}'");
            }
            for patient in hits {
                println!("{} - {}", patient.pet_name, patient.breed);
            }
        }
        PatientsAction::Show { pet } => {
            match charts.iter().find(|p| p.pet_name.eq_ignore_ascii_case(&pet)) {
                Some(patient) => render_chart(patient),
                None => return Err(format!("no patient chart for '{pet}'").into()),
            }
        }
    }
    Ok(())
}

fn render_chart(patient: &Patient) {
    println!("{} ({})", patient.pet_name, patient.breed);
    println!("  age:    {}", patient.age);
    println!("  weight: {}", patient.weight);
    if patient.allergies.is_empty() {
        println!("  allergies: no known allergies");
    } else {
        println!("  allergies: {}", patient.allergies.join(", "));
    }
    println!("  last lab ({}): {}", patient.lab_date, patient.last_lab_result);
}
