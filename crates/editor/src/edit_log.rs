use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use gridfold_table::Value;

/// One row's worth of (column name → value) entries, in column-name order.
pub type RowValues = BTreeMap<String, Value>;

/// Cumulative pending edits against one materialized table.
///
/// Produced by the host widget's change reporting and consumed by
/// `reconcile`. The host reports the full cumulative log for the lifetime
/// of one widget identity, not incremental deltas, so recording a log is
/// always wholesale replacement.
///
/// Position contract: keys in `edited` are positions in the table the log
/// was captured against. `deleted` is applied after appends, so its
/// positions index the post-append table; for rows that already existed
/// when the log was captured the two numbering schemes coincide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLog {
    /// Row position → column name → replacement value. Sparse; absent
    /// entries mean unchanged.
    pub edited: BTreeMap<usize, RowValues>,
    /// Rows appended after the existing rows, in order.
    pub added: Vec<RowValues>,
    /// Row positions to remove.
    pub deleted: BTreeSet<usize>,
}

impl EditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.edited.is_empty() && self.added.is_empty() && self.deleted.is_empty()
    }

    pub fn clear(&mut self) {
        self.edited.clear();
        self.added.clear();
        self.deleted.clear();
    }
}
