pub mod csv;
pub mod excel;

use std::path::Path;

use crate::types::{FileFormat, Result, Table};

/// Common trait for data file readers
pub trait TableReader {
    /// Read the whole file into a table
    fn read(&mut self) -> Result<Table>;
}

/// Create a reader for the given file path
pub fn create_reader(path: &Path) -> Result<Box<dyn TableReader>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let format = FileFormat::from_extension(ext).ok_or_else(|| {
        crate::error::Error::UnsupportedFormat(format!("Unsupported file extension: .{}", ext))
    })?;

    match format {
        FileFormat::Csv => Ok(Box::new(csv::CsvReader::new(path)?)),
        FileFormat::Tsv => Ok(Box::new(csv::CsvReader::new_tsv(path)?)),
        FileFormat::Excel => Ok(Box::new(excel::ExcelReader::new(path)?)),
    }
}
