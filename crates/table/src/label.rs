use std::fmt;

/// A column label as supplied by the host, before sanitation.
///
/// Tables only ever carry string column names. Hosts that hand over tables
/// labeled with numbers or booleans go through `Table::from_labeled`, which
/// converts every label to its string form up front.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Label {
    pub fn is_text(&self) -> bool {
        matches!(self, Label::Text(_))
    }

    /// The string form used as the column name.
    pub fn to_column_name(&self) -> String {
        match self {
            Label::Text(s) => s.clone(),
            Label::Integer(n) => n.to_string(),
            Label::Float(n) => format!("{n}"),
            Label::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Integer(n)
    }
}

/// Non-fatal notice that non-string labels were converted during sanitation.
///
/// One warning per table, listing every converted label. Editing a column
/// whose label was silently renamed by the host widget loses edits, so the
/// conversion happens here, visibly, before the table enters editing.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelWarning {
    /// String forms of the labels that were not strings.
    pub converted: Vec<String>,
}

impl fmt::Display for LabelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "columns with non-string labels were converted to strings: {}",
            self.converted.join(", ")
        )
    }
}
