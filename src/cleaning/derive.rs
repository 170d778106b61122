use crate::types::{Column, Result, Table, SOURCE_WEIGHT_COLUMN, WEIGHT_COLUMN};

/// Copy SAMPWEIGHT cell-for-cell into a `weight` column. The new column is
/// appended after the existing ones; an existing `weight` column is
/// overwritten in place (assignment semantics).
pub fn derive_weight(table: &mut Table) -> Result<()> {
    let source = table
        .column(SOURCE_WEIGHT_COLUMN)
        .ok_or_else(|| crate::error::Error::ColumnNotFound(SOURCE_WEIGHT_COLUMN.to_string()))?;
    let cells = source.cells.clone();

    if table.column(WEIGHT_COLUMN).is_some() {
        table.column_mut(WEIGHT_COLUMN)?.cells = cells;
    } else {
        let mut weight = Column::new(WEIGHT_COLUMN);
        weight.cells = cells;
        table.push_column(weight)?;
    }

    Ok(())
}
