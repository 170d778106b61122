use crate::types::{Cell, Result, Table};

use super::rules::RecodeRule;

/// Result of applying one rule to its column
#[derive(Debug, Clone)]
pub struct RecodeOutcome {
    pub column: String,
    pub recoded: u64,
}

/// Replace sentinel-coded cells in the rule's column with missing.
/// Cells already missing and cells with no numeric interpretation pass
/// through unchanged. Returns the number of cells recoded.
pub fn apply_rule(table: &mut Table, rule: &RecodeRule) -> Result<u64> {
    let column = table.column_mut(&rule.column)?;
    let mut recoded: u64 = 0;

    for cell in &mut column.cells {
        if let Some(value) = cell.as_number() {
            if rule.matches(value) {
                *cell = Cell::Missing;
                recoded += 1;
            }
        }
    }

    Ok(recoded)
}

/// Apply a rule set to the table, one column at a time. Rules target
/// disjoint columns, so application order is irrelevant. Fails before
/// touching anything else if a ruled column is absent.
pub fn apply_rules(table: &mut Table, rules: &[RecodeRule]) -> Result<Vec<RecodeOutcome>> {
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let recoded = apply_rule(table, rule)?;
        outcomes.push(RecodeOutcome {
            column: rule.column.clone(),
            recoded,
        });
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Column;

    fn column_of(name: &str, fields: &[&str]) -> Column {
        let mut col = Column::new(name);
        col.cells = fields.iter().map(|f| Cell::from_field(f)).collect();
        col
    }

    fn age_table(fields: &[&str]) -> Table {
        let mut table = Table::new();
        table.push_column(column_of("AGE", fields)).unwrap();
        table
    }

    #[test]
    fn test_sentinels_become_missing() {
        let mut table = age_table(&["45", "997", "998", "999", "60"]);
        let rule = RecodeRule::new("AGE", &[997.0, 998.0, 999.0]);

        let recoded = apply_rule(&mut table, &rule).unwrap();
        assert_eq!(recoded, 3);

        let cells = &table.column("AGE").unwrap().cells;
        assert_eq!(cells[0], Cell::Value("45".to_string()));
        assert_eq!(cells[1], Cell::Missing);
        assert_eq!(cells[2], Cell::Missing);
        assert_eq!(cells[3], Cell::Missing);
        assert_eq!(cells[4], Cell::Value("60".to_string()));
    }

    #[test]
    fn test_float_sentinels() {
        let mut table = Table::new();
        table
            .push_column(column_of("BMICALC", &["22.5", "996.0", "0.0", "31.2"]))
            .unwrap();
        let rule = RecodeRule::new("BMICALC", &[996.0, 0.0]);

        let recoded = apply_rule(&mut table, &rule).unwrap();
        assert_eq!(recoded, 2);

        let cells = &table.column("BMICALC").unwrap().cells;
        assert_eq!(cells[0], Cell::Value("22.5".to_string()));
        assert_eq!(cells[1], Cell::Missing);
        assert_eq!(cells[2], Cell::Missing);
        assert_eq!(cells[3], Cell::Value("31.2".to_string()));
    }

    #[test]
    fn test_missing_passes_through() {
        let mut table = age_table(&["", "NA", "45"]);
        let rule = RecodeRule::new("AGE", &[997.0]);

        let recoded = apply_rule(&mut table, &rule).unwrap();
        assert_eq!(recoded, 0);

        let cells = &table.column("AGE").unwrap().cells;
        assert_eq!(cells[0], Cell::Missing);
        assert_eq!(cells[1], Cell::Missing);
    }

    #[test]
    fn test_non_numeric_untouched() {
        let mut table = age_table(&["unknown", "45"]);
        let rule = RecodeRule::new("AGE", &[997.0]);

        apply_rule(&mut table, &rule).unwrap();
        let cells = &table.column("AGE").unwrap().cells;
        assert_eq!(cells[0], Cell::Value("unknown".to_string()));
    }

    #[test]
    fn test_missing_column_fails() {
        let mut table = age_table(&["45"]);
        let rule = RecodeRule::new("EDUC", &[996.0]);

        let result = apply_rule(&mut table, &rule);
        assert!(matches!(result, Err(Error::ColumnNotFound(name)) if name == "EDUC"));
    }

    #[test]
    fn test_other_columns_untouched() {
        let mut table = age_table(&["997", "45"]);
        table.push_column(column_of("SEX", &["1", "9"])).unwrap();

        let rules = vec![RecodeRule::new("AGE", &[997.0, 998.0, 999.0])];
        apply_rules(&mut table, &rules).unwrap();

        let sex = &table.column("SEX").unwrap().cells;
        assert_eq!(sex[0], Cell::Value("1".to_string()));
        assert_eq!(sex[1], Cell::Value("9".to_string()));
    }

    #[test]
    fn test_idempotent() {
        let mut table = age_table(&["45", "997", "60"]);
        let rules = vec![RecodeRule::new("AGE", &[997.0, 998.0, 999.0])];

        let first = apply_rules(&mut table, &rules).unwrap();
        assert_eq!(first[0].recoded, 1);

        let second = apply_rules(&mut table, &rules).unwrap();
        assert_eq!(second[0].recoded, 0);

        let cells = &table.column("AGE").unwrap().cells;
        assert_eq!(cells[0], Cell::Value("45".to_string()));
        assert_eq!(cells[1], Cell::Missing);
        assert_eq!(cells[2], Cell::Value("60".to_string()));
    }
}
