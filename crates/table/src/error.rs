use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two columns share the same name.
    DuplicateColumn { name: String },
    /// Two distinct non-string labels stringified to the same column name.
    LabelCollision { label: String },
    /// A column's length disagrees with the columns before it.
    LengthMismatch { column: String, expected: usize, actual: usize },
    /// Row position past the end of the table.
    RowOutOfBounds { position: usize, rows: usize },
    /// No column with this name.
    UnknownColumn { name: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateColumn { name } => write!(f, "duplicate column '{name}'"),
            Self::LabelCollision { label } => {
                write!(f, "column labels collide after string conversion: '{label}'")
            }
            Self::LengthMismatch { column, expected, actual } => {
                write!(f, "column '{column}' has {actual} value(s), expected {expected}")
            }
            Self::RowOutOfBounds { position, rows } => {
                write!(f, "row {position} out of bounds for table with {rows} row(s)")
            }
            Self::UnknownColumn { name } => write!(f, "unknown column '{name}'"),
        }
    }
}

impl std::error::Error for TableError {}
