use serde::{Deserialize, Serialize};

use gridfold_table::Table;

use crate::edit_log::EditLog;
use crate::error::EditorError;
use crate::host::{DisplayOptions, GridWidget, RowPolicy};
use crate::page::PageNavigation;
use crate::reconcile::{reconcile, Reconciled, SchemaWarning};
use crate::token::TokenSource;

/// Outcome of `on_page_activated`.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    /// True when a page transition folded the pending log into the live
    /// contents; false on pass-through.
    pub reconciled: bool,
    pub warnings: Vec<SchemaWarning>,
}

impl Activation {
    fn pass_through() -> Self {
        Self { reconciled: false, warnings: Vec::new() }
    }
}

/// One named editable table across reruns.
///
/// Owns the immutable baseline (the reset contents), the live materialized
/// view the widget renders from, the pending cumulative edit log, and the
/// widget identity token. Methods that mint tokens take a `TokenSource`;
/// the render boundary is passed in explicitly.
///
/// Single-threaded cooperative model: within one activation,
/// `on_page_activated` runs before `render`, and `record_edit` only ever
/// follows a completed render. A concurrent host must confine each session
/// to one logical user behind one mutex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSession {
    name: String,
    baseline: Table,
    current: Table,
    log: EditLog,
    reset_token: String,
}

impl EditorSession {
    /// Create a session for `name` with `baseline` as its reset contents.
    pub fn new(name: impl Into<String>, baseline: Table, tokens: &mut dyn TokenSource) -> Self {
        let name = name.into();
        let reset_token = Self::mint_token(&name, tokens);
        Self {
            current: baseline.clone(),
            baseline,
            log: EditLog::new(),
            reset_token,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn baseline(&self) -> &Table {
        &self.baseline
    }

    /// The live materialized view the widget renders from.
    pub fn current(&self) -> &Table {
        &self.current
    }

    pub fn log(&self) -> &EditLog {
        &self.log
    }

    /// The widget identity token. Changes only when an update demands a
    /// forced refresh.
    pub fn reset_token(&self) -> &str {
        &self.reset_token
    }

    /// Discard all edits and restore the baseline contents by value.
    ///
    /// Always refreshes the token: restoring contents the widget already
    /// shows would otherwise be ignored by the host's identity cache.
    pub fn reset(&mut self, tokens: &mut dyn TokenSource, after: Option<&mut dyn FnMut()>) {
        let baseline = self.baseline.clone();
        self.update_contents(baseline, true, tokens, after);
    }

    /// Replace the live contents and clear the pending log.
    ///
    /// `refresh_token` false keeps the widget instance alive (no flicker,
    /// scroll and selection preserved); use it only when the widget already
    /// shows equivalent contents, e.g. restoring state on a page revisit.
    pub fn update_contents(
        &mut self,
        contents: Table,
        refresh_token: bool,
        tokens: &mut dyn TokenSource,
        after: Option<&mut dyn FnMut()>,
    ) {
        self.replace_contents(contents);
        if refresh_token {
            self.reset_token = Self::mint_token(&self.name, tokens);
        }
        if let Some(callback) = after {
            callback();
        }
    }

    /// Fold the pending log into the live contents. Pure; session state is
    /// untouched.
    pub fn materialize_edits(&self) -> Result<Reconciled, EditorError> {
        reconcile(&self.current, &self.log)
    }

    /// Run on every page activation, before rendering.
    ///
    /// On a page transition the pending log is folded into the live
    /// contents exactly once and cleared; the token is left alone so the
    /// widget keeps its scroll and selection state. When the page is
    /// unchanged nothing happens.
    pub fn on_page_activated(&mut self, nav: &PageNavigation) -> Result<Activation, EditorError> {
        if !nav.page_changed() {
            return Ok(Activation::pass_through());
        }
        let Reconciled { table, warnings } = self.materialize_edits()?;
        self.replace_contents(table);
        Ok(Activation { reconciled: true, warnings })
    }

    /// Replace the pending log with the host-reported cumulative log.
    ///
    /// The host reports the full log per widget identity, not a delta, so
    /// there is nothing to merge.
    pub fn record_edit(&mut self, log: EditLog) {
        self.log = log;
    }

    /// Render the live contents through the host widget under the current
    /// token, and capture any edits the widget reports.
    pub fn render(
        &mut self,
        widget: &mut dyn GridWidget,
        row_policy: RowPolicy,
        options: &DisplayOptions,
    ) {
        if let Some(log) =
            widget.render_editable_grid(&self.current, &self.reset_token, row_policy, options)
        {
            self.record_edit(log);
        }
    }

    fn replace_contents(&mut self, contents: Table) {
        self.current = contents;
        self.log.clear();
    }

    fn mint_token(name: &str, tokens: &mut dyn TokenSource) -> String {
        format!("{name}-{}", tokens.next_token())
    }
}
