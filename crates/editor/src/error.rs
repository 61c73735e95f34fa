use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The edit log references a row past the end of the table it is being
    /// applied to: the table was replaced or shrunk after the log was
    /// captured. Never clamped; clamping would redirect the edit onto an
    /// unrelated row.
    StaleLog { position: usize, rows: usize },
    /// The edit log edits a column the table does not have.
    UnknownColumn { position: usize, column: String },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleLog { position, rows } => {
                write!(
                    f,
                    "stale edit log: row {position} referenced but table has {rows} row(s)"
                )
            }
            Self::UnknownColumn { position, column } => {
                write!(f, "edit log references unknown column '{column}' at row {position}")
            }
        }
    }
}

impl std::error::Error for EditorError {}
