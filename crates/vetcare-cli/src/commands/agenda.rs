use clap::Subcommand;
use vetcare_core::agenda::{
    book_appointment, has_gap_before, resolve_duration, Appointment, AppointmentRequest,
    PatientCategory, ServiceType,
};
use vetcare_core::samples;
use vetcare_core::time::parse_time_of_day;

#[derive(Subcommand)]
pub enum AgendaAction {
    /// Show the day's agenda with free-slot and conflict markers
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Book a new appointment and show the updated agenda
    Add {
        /// Start time, HH:mm
        time: String,
        /// Pet name
        pet: String,
        /// Owner name
        owner: String,
        /// Service kind (see `agenda services` for the catalogue)
        #[arg(long, default_value = "general-consult")]
        service: String,
        /// Patient category: new-patient or follow-up
        #[arg(long, default_value = "follow-up")]
        category: String,
    },
    /// List the service catalogue with default durations
    Services,
}

pub fn run(action: AgendaAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AgendaAction::List { json } => {
            let appointments = samples::sample_appointments();
            if json {
                println!("{}", serde_json::to_string_pretty(&appointments)?);
            } else {
                render_agenda(&appointments);
            }
        }
        AgendaAction::Add {
            time,
            pet,
            owner,
            service,
            category,
        } => {
            let start_time = parse_time_of_day(&time)?;
            let service: ServiceType = service.parse()?;
            let patient_category: PatientCategory = category.parse()?;

            let request = AppointmentRequest {
                pet_name: pet,
                owner_name: owner,
                start_time,
                patient_category,
                service,
            };

            let day = samples::sample_appointments();
            let updated = book_appointment(&day, request)?;
            render_agenda(&updated);

            let booked_a_conflict = updated.len() > day.len()
                && updated
                    .iter()
                    .any(|a| a.conflict && day.iter().all(|b| b.id != a.id));
            if booked_a_conflict {
                eprintln!("warning: the new appointment overlaps an existing one");
            }
        }
        AgendaAction::Services => {
            println!("{:<22} {:>12} {:>12}", "service", "new patient", "follow-up");
            for service in ServiceType::ALL {
                println!(
                    "{:<22} {:>11}m {:>11}m",
                    service.as_str(),
                    resolve_duration(service, PatientCategory::NewPatient),
                    resolve_duration(service, PatientCategory::FollowUp),
                );
            }
        }
    }
    Ok(())
}

fn render_agenda(appointments: &[Appointment]) {
    let mut previous: Option<&Appointment> = None;
    for appointment in appointments {
        if has_gap_before(appointment.start_time, previous) {
            println!("       -- free slot --");
        }

        let conflict = if appointment.conflict { "  [CONFLICT]" } else { "" };
        println!(
            "{} {:>4}  {} ({}) - {} / {}{}",
            appointment.start_time.format("%H:%M"),
            format!("{}m", appointment.duration_minutes),
            appointment.pet_name,
            appointment.service.label(),
            appointment.patient_category.label(),
            appointment.owner_name,
            conflict,
        );

        previous = Some(appointment);
    }
}
