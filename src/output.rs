use std::path::Path;

use crate::report::CleaningReport;
use crate::types::{Result, Table};

/// Write the table as a comma-delimited file with a header row.
/// Missing cells render as empty fields.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(std::io::BufWriter::new(file));

    writer.write_record(table.headers())?;

    for row_idx in 0..table.row_count() {
        let record: Vec<&str> = table
            .columns()
            .iter()
            .map(|col| col.cells[row_idx].render())
            .collect();
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the cleaning report to a JSON file
pub fn write_json_file(report: &CleaningReport, path: &Path) -> Result<()> {
    std::fs::write(path, to_json_string(report)?)?;
    Ok(())
}

/// Render the cleaning report as a JSON string
pub fn to_json_string(report: &CleaningReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
