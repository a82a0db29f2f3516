use clap::Subcommand;
use vetcare_core::inventory::summarize;
use vetcare_core::samples;

#[derive(Subcommand)]
pub enum InventoryAction {
    /// List the medication shelf
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Per-status stock tallies
    Summary,
}

pub fn run(action: InventoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = samples::sample_inventory();

    match action {
        InventoryAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&shelf)?);
            } else {
                println!(
                    "{:<22} {:<13} {:<10} {:<9} {:>4}  {}",
                    "name", "barcode", "shelf", "expires", "qty", "status"
                );
                for medication in &shelf {
                    let reorder = if medication.needs_reorder() { "  [REORDER]" } else { "" };
                    println!(
                        "{:<22} {:<13} {:<10} {:<9} {:>4}  {}{}",
                        medication.name,
                        medication.barcode_id,
                        medication.shelf_location,
                        medication.expiration_date,
                        medication.quantity,
                        medication.status.label(),
                        reorder,
                    );
                }
            }
        }
        InventoryAction::Summary => {
            let summary = summarize(&shelf);
            println!("expired:   {} items", summary.expired);
            println!("low stock: {} items", summary.low_stock);
            println!("in stock:  {} items", summary.in_stock);
        }
    }
    Ok(())
}
