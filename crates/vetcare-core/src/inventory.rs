//! Medication stock records and tallies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock state of a medication row.
///
/// Stored on the record rather than derived from the expiration label,
/// which is a display-only month string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    Expired,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::Expired => "expired",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::Expired => "Expired",
        }
    }

    /// Badge color used by the presentation layer.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::InStock => "green",
            Self::LowStock => "yellow",
            Self::Expired => "red",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A medication row in the shelf inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub barcode_id: String,
    pub shelf_location: String,
    /// Display label, e.g. "Dec 2026".
    pub expiration_date: String,
    pub status: StockStatus,
    pub quantity: u32,
}

impl Medication {
    /// Low-stock and expired rows get the reorder call-to-action.
    pub fn needs_reorder(&self) -> bool {
        matches!(self.status, StockStatus::LowStock | StockStatus::Expired)
    }
}

/// Per-status row counts for the inventory footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub in_stock: usize,
    pub low_stock: usize,
    pub expired: usize,
}

/// Tally rows by status.
pub fn summarize(medications: &[Medication]) -> StockSummary {
    let mut summary = StockSummary::default();
    for medication in medications {
        match medication.status {
            StockStatus::InStock => summary.in_stock += 1,
            StockStatus::LowStock => summary.low_stock += 1,
            StockStatus::Expired => summary.expired += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, status: StockStatus) -> Medication {
        Medication {
            id: "1".to_string(),
            name: name.to_string(),
            barcode_id: "MED-0000000".to_string(),
            shelf_location: "Shelf A1".to_string(),
            expiration_date: "Dec 2026".to_string(),
            status,
            quantity: 10,
        }
    }

    #[test]
    fn summary_counts_each_status() {
        let rows = vec![
            row("Amoxicillin 500mg", StockStatus::InStock),
            row("Carprofen 100mg", StockStatus::LowStock),
            row("Metronidazole 250mg", StockStatus::Expired),
            row("Prednisone 20mg", StockStatus::InStock),
        ];
        assert_eq!(
            summarize(&rows),
            StockSummary {
                in_stock: 2,
                low_stock: 1,
                expired: 1,
            }
        );
    }

    #[test]
    fn only_healthy_stock_skips_reorder() {
        assert!(!row("Amoxicillin 500mg", StockStatus::InStock).needs_reorder());
        assert!(row("Carprofen 100mg", StockStatus::LowStock).needs_reorder());
        assert!(row("Metronidazole 250mg", StockStatus::Expired).needs_reorder());
    }
}
