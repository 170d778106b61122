use serde::{Deserialize, Serialize};

/// Per-column cleaning counts for a ruled column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    /// Cells replaced with missing by this run
    pub recoded: u64,
    /// Cells missing after cleaning (source missing + recoded)
    pub missing: u64,
}

/// Summary of a cleaning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningReport {
    pub version: String,
    pub input_file: String,

    /// SHA-256 of the input file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hash: Option<String>,

    pub generated: String,
    pub rows: u64,
    pub columns: Vec<ColumnReport>,
}

impl CleaningReport {
    pub fn new(input_file: String) -> Self {
        Self {
            version: "1.0.0".to_string(),
            input_file,
            input_hash: None,
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            rows: 0,
            columns: Vec::new(),
        }
    }

    /// Human-readable run summary, one line per ruled column
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "Cleaned {} ({} rows, {} cells recoded)",
            self.input_file,
            self.rows,
            self.total_recoded()
        ));

        for col in &self.columns {
            lines.push(format!(
                "  {}: {} recoded, {} missing",
                col.name, col.recoded, col.missing
            ));
        }

        lines.join("\n")
    }

    /// Total cells recoded across all ruled columns
    pub fn total_recoded(&self) -> u64 {
        self.columns.iter().map(|c| c.recoded).sum()
    }
}
