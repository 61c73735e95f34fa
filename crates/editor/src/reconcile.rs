use std::fmt;

use gridfold_table::Table;

use crate::edit_log::EditLog;
use crate::error::EditorError;

/// Soft diagnostic produced while folding added rows in. Never fatal; the
/// host decides whether to show these to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaWarning {
    /// An added row omitted this column; the cell was filled with
    /// `Value::Missing`.
    MissingColumn { row: usize, column: String },
    /// An added row carried a column the table does not have; the value was
    /// dropped. The schema is never auto-extended.
    ExtraColumn { row: usize, column: String },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { row, column } => {
                write!(f, "added row {row} omitted column '{column}'; filled with missing")
            }
            Self::ExtraColumn { row, column } => {
                write!(f, "added row {row} carried unknown column '{column}'; value dropped")
            }
        }
    }
}

/// Result of folding an edit log into a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub table: Table,
    pub warnings: Vec<SchemaWarning>,
}

/// Fold `log` into a copy of `baseline` and return the materialized table.
///
/// Applied in a fixed order, because cell edits address baseline positions
/// while appends and removals change the position space:
///
/// 1. overwrite cells from `log.edited` (positions must be in bounds)
/// 2. append `log.added` rows in order
/// 3. remove `log.deleted` positions and renumber densely
///
/// Never mutates `baseline`; an empty log returns an equal table.
pub fn reconcile(baseline: &Table, log: &EditLog) -> Result<Reconciled, EditorError> {
    let mut table = baseline.clone();

    for (&position, cells) in &log.edited {
        if position >= table.row_count() {
            return Err(EditorError::StaleLog { position, rows: table.row_count() });
        }
        for (column, value) in cells {
            table
                .set(position, column, value.clone())
                .map_err(|_| EditorError::UnknownColumn {
                    position,
                    column: column.clone(),
                })?;
        }
    }

    let mut warnings = Vec::new();
    let column_names: Vec<String> =
        table.column_names().iter().map(|n| n.to_string()).collect();
    for (offset, row) in log.added.iter().enumerate() {
        let position = baseline.row_count() + offset;
        for column in &column_names {
            if !row.contains_key(column) {
                warnings.push(SchemaWarning::MissingColumn {
                    row: position,
                    column: column.clone(),
                });
            }
        }
        for column in row.keys() {
            if !table.has_column(column) {
                warnings.push(SchemaWarning::ExtraColumn {
                    row: position,
                    column: column.clone(),
                });
            }
        }
        table.push_row(row);
    }

    if let Some(&max) = log.deleted.iter().next_back() {
        if max >= table.row_count() {
            return Err(EditorError::StaleLog { position: max, rows: table.row_count() });
        }
    }
    table.remove_rows(&log.deleted);

    Ok(Reconciled { table, warnings })
}
