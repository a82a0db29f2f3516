use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vetcare-cli", version, about = "VetCare clinic dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily appointment agenda
    Agenda {
        #[command(subcommand)]
        action: commands::agenda::AgendaAction,
    },
    /// Patient quick access
    Patients {
        #[command(subcommand)]
        action: commands::patients::PatientsAction,
    },
    /// Medication inventory
    Inventory {
        #[command(subcommand)]
        action: commands::inventory::InventoryAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Agenda { action } => commands::agenda::run(action),
        Commands::Patients { action } => commands::patients::run(action),
        Commands::Inventory { action } => commands::inventory::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
