use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::Result;

/// A recode rule: cells in `column` whose numeric value is one of
/// `sentinels` are replaced with missing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecodeRule {
    pub column: String,
    pub sentinels: Vec<f64>,
}

impl RecodeRule {
    pub fn new(column: &str, sentinels: &[f64]) -> Self {
        Self {
            column: column.to_string(),
            sentinels: sentinels.to_vec(),
        }
    }

    /// Sentinel set membership for a parsed cell value
    pub fn matches(&self, value: f64) -> bool {
        self.sentinels.iter().any(|s| *s == value)
    }
}

/// Built-in rule table for the NHIS 2022 extract. Rules target disjoint
/// columns, so application order does not matter.
pub static DEFAULT_RULES: Lazy<Vec<RecodeRule>> = Lazy::new(|| {
    vec![
        // Demographics
        RecodeRule::new("AGE", &[997.0, 998.0, 999.0]),
        RecodeRule::new("SEX", &[7.0, 8.0, 9.0]),
        RecodeRule::new("MARSTCUR", &[0.0, 9.0]),
        RecodeRule::new("EDUC", &[996.0, 997.0, 998.0, 999.0, 0.0]),
        // Health condition flags
        RecodeRule::new("CANCEREV", &[7.0, 8.0, 9.0, 0.0]),
        RecodeRule::new("CHEARTDIEV", &[7.0, 8.0, 9.0, 0.0]),
        RecodeRule::new("DIABETICEV", &[7.0, 8.0, 9.0, 0.0]),
        RecodeRule::new("HEARTATTEV", &[7.0, 8.0, 9.0, 0.0]),
        RecodeRule::new("STROKEV", &[7.0, 8.0, 9.0, 0.0]),
        // Health metrics
        RecodeRule::new("BMICALC", &[996.0, 0.0]),
        RecodeRule::new("HRSLEEP", &[97.0, 98.0, 99.0, 0.0]),
        RecodeRule::new("VIG10DMIN", &[996.0, 997.0, 998.0, 999.0, 0.0]),
        RecodeRule::new("CIGDAYMO", &[96.0, 97.0, 98.0, 99.0]),
        RecodeRule::new("FRUTNO", &[995.0, 996.0, 997.0, 998.0, 999.0]),
    ]
});

/// Load a custom rule set from a JSON file (array of rules)
pub fn load_rules(path: &Path) -> Result<Vec<RecodeRule>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
