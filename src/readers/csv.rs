use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder};

use crate::types::{Cell, Column, Result, Table};

use super::TableReader;

/// CSV/TSV file reader
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Create a new CSV reader
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            delimiter: b',',
        })
    }

    /// Create a new TSV reader
    pub fn new_tsv(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            delimiter: b'\t',
        })
    }

    fn create_reader(&self) -> Result<Reader<BufReader<File>>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        // flexible(false): a record with the wrong field count is a
        // structural error, not data
        let csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);
        Ok(csv_reader)
    }
}

impl TableReader for CsvReader {
    fn read(&mut self) -> Result<Table> {
        let mut reader = self.create_reader()?;

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut columns: Vec<Column> = headers.iter().map(|h| Column::new(h)).collect();

        for result in reader.records() {
            let record = result?;
            for (col_idx, field) in record.iter().enumerate() {
                columns[col_idx].cells.push(Cell::from_field(field));
            }
        }

        let mut table = Table::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }
}
