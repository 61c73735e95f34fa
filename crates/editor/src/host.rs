//! Boundaries to the host framework.
//!
//! The host renders widgets and persists keyed state across reruns; the
//! session never reaches into ambient state by string key. Both boundaries
//! are explicit: the widget is passed to `EditorSession::render`, and the
//! state store is an object the host owns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use gridfold_table::Table;

use crate::edit_log::EditLog;

/// Whether the rendered grid lets the user add and delete rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPolicy {
    Fixed,
    #[default]
    Dynamic,
}

/// Presentation options passed through to the host widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub hide_index: bool,
    /// Host-defined per-column widget configuration (formats, widths,
    /// editability). Opaque here; forwarded to the widget untouched.
    pub column_config: Option<serde_json::Value>,
}

/// Host widget boundary.
///
/// The host guarantees that the returned log is the full cumulative edit
/// log for the lifetime of the given identity token, captured during its
/// own event handling before the next full rerun. `None` means the user
/// changed nothing this pass.
pub trait GridWidget {
    fn render_editable_grid(
        &mut self,
        table: &Table,
        identity: &str,
        row_policy: RowPolicy,
        options: &DisplayOptions,
    ) -> Option<EditLog>;
}

/// Whether a state entry survives to the next activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persistence {
    Persistent,
    /// Dropped when a new activation begins. Used for widget-instance
    /// state (identity-derived keys, form submissions) that must not be
    /// replayed into a rerun.
    Ephemeral,
}

#[derive(Debug, Clone)]
struct Entry {
    value: serde_json::Value,
    persistence: Persistence,
}

/// Keyed state carried across activations.
///
/// Each entry carries an explicit persistence flag; `begin_activation` is
/// the single point where ephemeral entries fall away.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    entries: HashMap<String, Entry>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
        persistence: Persistence,
    ) {
        self.entries.insert(key.into(), Entry { value, persistence });
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Call at the top of each activation: ephemeral entries do not carry
    /// over.
    pub fn begin_activation(&mut self) {
        self.entries
            .retain(|_, e| e.persistence == Persistence::Persistent);
    }
}

/// Scripted `GridWidget` for tests: reports queued edit logs and records
/// every render call.
#[derive(Debug, Default)]
pub struct RecordingWidget {
    responses: Vec<Option<EditLog>>,
    /// (identity, row count) per render, in order.
    pub renders: Vec<(String, usize)>,
    /// Options seen on the most recent render.
    pub last_options: Option<DisplayOptions>,
}

impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the log the widget will report on its next render.
    pub fn report_on_next_render(&mut self, log: EditLog) {
        self.responses.push(Some(log));
    }

    pub fn last_identity(&self) -> Option<&str> {
        self.renders.last().map(|(identity, _)| identity.as_str())
    }
}

impl GridWidget for RecordingWidget {
    fn render_editable_grid(
        &mut self,
        table: &Table,
        identity: &str,
        _row_policy: RowPolicy,
        options: &DisplayOptions,
    ) -> Option<EditLog> {
        self.renders.push((identity.to_string(), table.row_count()));
        self.last_options = Some(options.clone());
        if self.responses.is_empty() {
            None
        } else {
            self.responses.remove(0)
        }
    }
}
