use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::label::{Label, LabelWarning};
use crate::value::Value;

/// One named column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// An ordered collection of named columns, all equal length.
///
/// Rows are addressed by dense zero-based position. Position, not identity,
/// is the addressing scheme: removing rows renumbers the survivors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from (name, values) pairs.
    ///
    /// Rejects duplicate names and unequal column lengths.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut out: Vec<Column> = Vec::new();
        for (name, values) in columns {
            let name = name.into();
            if out.iter().any(|c| c.name == name) {
                return Err(TableError::DuplicateColumn { name });
            }
            if let Some(first) = out.first() {
                if values.len() != first.values.len() {
                    return Err(TableError::LengthMismatch {
                        column: name,
                        expected: first.values.len(),
                        actual: values.len(),
                    });
                }
            }
            out.push(Column { name, values });
        }
        Ok(Self { columns: out })
    }

    /// Build a table from host-supplied labels, sanitizing them to strings.
    ///
    /// Returns the table plus a warning when any label needed conversion.
    /// Two distinct labels stringifying to the same name is an error, not a
    /// silent merge.
    pub fn from_labeled<I>(columns: I) -> Result<(Self, Option<LabelWarning>), TableError>
    where
        I: IntoIterator<Item = (Label, Vec<Value>)>,
    {
        let mut converted = Vec::new();
        let mut named: Vec<(String, Vec<Value>)> = Vec::new();
        for (label, values) in columns {
            let name = label.to_column_name();
            if named.iter().any(|(existing, _)| *existing == name) {
                if !label.is_text() || converted.contains(&name) {
                    return Err(TableError::LabelCollision { label: name });
                }
                return Err(TableError::DuplicateColumn { name });
            }
            if !label.is_text() {
                converted.push(name.clone());
            }
            named.push((name, values));
        }
        let table = Self::from_columns(named)?;
        let warning = if converted.is_empty() {
            None
        } else {
            Some(LabelWarning { converted })
        };
        Ok((table, warning))
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.column(column)?.get(row)
    }

    /// Overwrite the cell at (row, column).
    pub fn set(&mut self, row: usize, column: &str, value: Value) -> Result<(), TableError> {
        let rows = self.row_count();
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == column)
            .ok_or_else(|| TableError::UnknownColumn { name: column.to_string() })?;
        if row >= rows {
            return Err(TableError::RowOutOfBounds { position: row, rows });
        }
        col.values[row] = value;
        Ok(())
    }

    /// Append one trailing row.
    ///
    /// Columns absent from `values` are filled with `Value::Missing`. Keys
    /// matching no column are ignored here; the caller decides whether to
    /// surface them.
    pub fn push_row(&mut self, values: &BTreeMap<String, Value>) {
        for col in &mut self.columns {
            col.values.push(values.get(&col.name).cloned().unwrap_or_default());
        }
    }

    /// Remove the rows at `positions` and renumber the survivors densely.
    ///
    /// Positions past the end are ignored; callers bound-check first.
    pub fn remove_rows(&mut self, positions: &BTreeSet<usize>) {
        for col in &mut self.columns {
            let mut position = 0;
            col.values.retain(|_| {
                let keep = !positions.contains(&position);
                position += 1;
                keep
            });
        }
    }
}
