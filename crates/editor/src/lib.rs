//! `gridfold-editor` — edit-log reconciliation and editor sessions for
//! editable grid widgets in rerun-per-interaction hosts.
//!
//! Pure library crate: the host framework renders the grid and reports the
//! user's cumulative edit log; this crate folds the log into the table on
//! page transitions and manages the widget identity token that forces a
//! visual refresh. No UI or IO dependencies.

pub mod edit_log;
pub mod error;
pub mod host;
pub mod page;
pub mod reconcile;
pub mod session;
pub mod token;

pub use edit_log::EditLog;
pub use error::EditorError;
pub use host::{DisplayOptions, GridWidget, Persistence, RecordingWidget, RowPolicy, StateStore};
pub use page::PageNavigation;
pub use reconcile::{reconcile, Reconciled, SchemaWarning};
pub use session::{Activation, EditorSession};
pub use token::{RandomTokenSource, SequentialTokenSource, TokenSource};
