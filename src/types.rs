use crate::values::{is_missing, parse_numeric};

/// Source column holding the sampling weight in NHIS extracts
pub const SOURCE_WEIGHT_COLUMN: &str = "SAMPWEIGHT";

/// Name of the derived analysis weight column
pub const WEIGHT_COLUMN: &str = "weight";

/// A single table cell. Raw field text is kept as-is so that values which
/// survive cleaning round-trip byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Value(String),
}

impl Cell {
    /// Build a cell from a raw delimited field, mapping missing tokens
    /// (empty string, NA, NULL, ...) to `Missing`
    pub fn from_field(field: &str) -> Self {
        if is_missing(field) {
            Cell::Missing
        } else {
            Cell::Value(field.to_string())
        }
    }

    /// Numeric interpretation of the cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Missing => None,
            Cell::Value(s) => parse_numeric(s),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Output rendering: missing cells serialize as empty fields
    pub fn render(&self) -> &str {
        match self {
            Cell::Missing => "",
            Cell::Value(s) => s,
        }
    }
}

/// A named column of cells
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
        }
    }
}

/// In-memory table: ordered named columns of equal length.
/// Row count is fixed after load; columns are addressed by name.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Mutable access to a column by name; the caller's name must exist
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| crate::error::Error::ColumnNotFound(name.to_string()))
    }

    /// Append a column. Its length must match the table's row count
    /// (unless the table is still empty).
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.cells.len() != self.row_count() {
            return Err(crate::error::Error::InvalidInput(format!(
                "Column '{}' has {} cells, expected {}",
                column.name,
                column.cells.len(),
                self.row_count()
            )));
        }
        self.columns.push(column);
        Ok(())
    }
}

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Excel,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "tsv" | "tab" => Some(FileFormat::Tsv),
            "xlsx" | "xls" | "xlsm" | "xlsb" => Some(FileFormat::Excel),
            _ => None,
        }
    }
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, crate::error::Error>;
