//! `gridfold-table` — Table model for editable grid widgets.
//!
//! Ordered named columns over dense value storage, addressed by zero-based
//! row position. Column labels are sanitized to strings before a table
//! enters editing; the editor crate folds edit logs into these tables.

pub mod error;
pub mod label;
pub mod table;
pub mod value;

pub use error::TableError;
pub use label::{Label, LabelWarning};
pub use table::{Column, Table};
pub use value::Value;
