// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{DaySummaryExport, DaySummaryRow, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(days: &[DaySummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(days)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", days.len(), path);
    Ok(())
}

/// Export CSV (header included through serde).
pub(crate) fn export_csv(days: &[DaySummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for day in days {
        wtr.serialize(DaySummaryRow::from(day))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", days.len(), path);
    Ok(())
}
