use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::cleaning::{apply_rules, derive_weight, RecodeRule};
use crate::readers::create_reader;
use crate::report::{CleaningReport, ColumnReport};
use crate::types::{Result, Table};

/// Options for a cleaning run
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub rules: Vec<RecodeRule>,
    /// Record the input file's SHA-256 in the report
    pub hash_input: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            rules: crate::cleaning::DEFAULT_RULES.clone(),
            hash_input: true,
        }
    }
}

/// Result of a cleaning run: the cleaned table and its report
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleaningReport,
}

/// Run the cleaning pipeline on one input file:
/// load, derive the weight column, apply the recode rules.
/// Writing the output is the caller's step, so a failure here
/// leaves no output file behind.
pub fn clean_file(input: &Path, options: &CleanOptions) -> Result<CleanOutcome> {
    let mut reader = create_reader(input)?;
    let mut table = reader.read()?;

    derive_weight(&mut table)?;
    let outcomes = apply_rules(&mut table, &options.rules)?;

    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mut report = CleaningReport::new(file_name);
    report.rows = table.row_count() as u64;

    if options.hash_input {
        report.input_hash = Some(compute_file_hash(input)?);
    }

    for outcome in outcomes {
        let missing = table
            .column(&outcome.column)
            .map_or(0, |col| col.cells.iter().filter(|c| c.is_missing()).count());
        report.columns.push(ColumnReport {
            name: outcome.column,
            recoded: outcome.recoded,
            missing: missing as u64,
        });
    }

    Ok(CleanOutcome { table, report })
}

/// Compute SHA-256 hash of a file (streaming to handle large files)
fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
