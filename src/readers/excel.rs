use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use crate::types::{Cell, Column, Result, Table};
use crate::values::is_missing;

use super::TableReader;

/// Excel file reader (supports .xlsx, .xls, .xlsm, .xlsb). Reads the first
/// worksheet; the cleaned output is always CSV.
pub struct ExcelReader {
    path: PathBuf,
}

impl ExcelReader {
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Convert Excel Data to its string representation
    fn data_to_string(dt: &Data) -> String {
        match dt {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Float(f) => f.to_string(),
            Data::Int(i) => i.to_string(),
            Data::Bool(b) => b.to_string(),
            Data::DateTime(d) => Self::excel_serial_to_date_string(d.as_f64()),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
            Data::Error(e) => format!("#{:?}", e),
        }
    }

    /// Convert Excel serial date to ISO date string
    fn excel_serial_to_date_string(serial: f64) -> String {
        // Excel epoch is 1899-12-30 (with the 1900 leap year bug)
        let days = serial as i64;
        let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        if let Some(date) = base.checked_add_signed(chrono::Duration::days(days)) {
            date.format("%Y-%m-%d").to_string()
        } else {
            serial.to_string()
        }
    }

    /// Convert Excel Data to a table cell
    fn data_to_cell(dt: &Data) -> Cell {
        match dt {
            Data::Empty | Data::Error(_) => Cell::Missing,
            Data::String(s) if is_missing(s) => Cell::Missing,
            other => Cell::Value(Self::data_to_string(other)),
        }
    }
}

impl TableReader for ExcelReader {
    fn read(&mut self) -> Result<Table> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| crate::error::Error::InvalidInput("Workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(crate::error::Error::Excel)?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(Self::data_to_string).collect())
            .unwrap_or_default();

        let num_cols = headers.len();
        let mut columns: Vec<Column> = headers.iter().map(|h| Column::new(h)).collect();

        // Short rows pad with missing; cells beyond the header are dropped
        for row in rows {
            for col_idx in 0..num_cols {
                let cell = row
                    .get(col_idx)
                    .map(Self::data_to_cell)
                    .unwrap_or(Cell::Missing);
                columns[col_idx].cells.push(cell);
            }
        }

        let mut table = Table::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }
}
