use hotel_core::repository::StoreError;
use hotel_core::Reservation;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const RULE_WIDTH: usize = 70;

/// Writes the human-readable booking report. The file is never read back.
pub struct ReportWriter {
    path: PathBuf,
    currency_symbol: String,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, currency_symbol: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn export<'a, I>(&self, reservations: I) -> Result<PathBuf, StoreError>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let body = render_report(reservations, &self.currency_symbol);
        fs::write(&self.path, body).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Report exported to {}", self.path.display());
        Ok(self.path.clone())
    }
}

/// Fixed-width table, one row per reservation in the order given
pub fn render_report<'a, I>(reservations: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    // Writing into a String cannot fail
    let _ = writeln!(out, "HOTEL RESERVATION REPORT");
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(
        out,
        "{:<10} {:<18} {:<6} {:<12} {:<12} {:<12} {:<10}",
        "ID", "Guest", "Room", "Check-In", "Check-Out", "Total", "Status"
    );
    let _ = writeln!(out, "{}", light);

    for r in reservations {
        let _ = writeln!(
            out,
            "{:<10} {:<18} {:<6} {:<12} {:<12} {}{:<11.2} {:<10}",
            r.booking_id().as_str(),
            r.guest_name(),
            r.room_number(),
            r.check_in().to_string(),
            r.check_out().to_string(),
            currency_symbol,
            r.total_amount() as f64,
            r.status().as_str(),
        );
    }

    let _ = writeln!(out, "{}", heavy);
    out
}
