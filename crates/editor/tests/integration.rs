//! End-to-end simulation of a rerun-per-interaction host: every user
//! interaction reruns the page top to bottom, state survives only through
//! the keyed store, and the grid widget reports cumulative edit logs.

use std::collections::{BTreeMap, BTreeSet};

use gridfold_editor::{
    DisplayOptions, EditLog, EditorSession, PageNavigation, Persistence, RecordingWidget,
    RowPolicy, SequentialTokenSource, StateStore,
};
use gridfold_table::{Table, Value};

fn baseline() -> Table {
    Table::from_columns(vec![
        ("a", vec![1.into(), 2.into(), 3.into()]),
        ("b", vec![4.into(), 5.into(), 6.into()]),
    ])
    .unwrap()
}

fn row(cells: &[(&str, Value)]) -> BTreeMap<String, Value> {
    cells.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

/// Load the session and navigation state from the store, or bootstrap them
/// on the first run. Mirrors the top-of-page decoration every page runs.
fn load_state(
    store: &mut StateStore,
    page_id: &str,
    tokens: &mut SequentialTokenSource,
) -> (EditorSession, PageNavigation) {
    store.begin_activation();
    let session = match store.get("df") {
        Some(value) => serde_json::from_value(value.clone()).unwrap(),
        None => EditorSession::new("df", baseline(), tokens),
    };
    let mut nav = match store.get("nav") {
        Some(value) => serde_json::from_value(value.clone()).unwrap(),
        None => PageNavigation::new(page_id),
    };
    nav.begin_activation(page_id);
    (session, nav)
}

/// Persist the session and navigation state at the bottom of the page.
fn save_state(store: &mut StateStore, session: &EditorSession, nav: &mut PageNavigation) {
    nav.finish_activation();
    store.set(
        "df",
        serde_json::to_value(session).unwrap(),
        Persistence::Persistent,
    );
    store.set("nav", serde_json::to_value(&nav).unwrap(), Persistence::Persistent);
    // widget-instance state keyed by identity never carries over
    store.set(
        format!("widget-{}", session.reset_token()),
        serde_json::Value::Bool(true),
        Persistence::Ephemeral,
    );
}

/// One full page execution: activate, render the grid if this is its page,
/// maybe capture user edits. The df grid lives on page1.
fn run_page(
    store: &mut StateStore,
    page_id: &str,
    tokens: &mut SequentialTokenSource,
    widget: &mut RecordingWidget,
) -> EditorSession {
    let (mut session, mut nav) = load_state(store, page_id, tokens);
    session.on_page_activated(&nav).unwrap();
    if page_id == "page1" {
        session.render(widget, RowPolicy::Dynamic, &DisplayOptions::default());
    }
    save_state(store, &session, &mut nav);
    session
}

#[test]
fn edits_survive_navigating_away_and_back() {
    let mut store = StateStore::new();
    let mut tokens = SequentialTokenSource::new();
    let mut widget = RecordingWidget::new();

    // first run of page1: widget shows the baseline
    let session = run_page(&mut store, "page1", &mut tokens, &mut widget);
    let original_token = session.reset_token().to_string();
    assert_eq!(session.current(), &baseline());

    // the user edits a cell and deletes a row; the host reruns page1 and
    // the widget reports the cumulative log
    widget.report_on_next_render(EditLog {
        edited: BTreeMap::from([(1, row(&[("b", 50.into())]))]),
        deleted: BTreeSet::from([0]),
        ..EditLog::new()
    });
    let session = run_page(&mut store, "page1", &mut tokens, &mut widget);
    assert!(!session.log().is_empty());
    // same page: contents still the baseline, pending log untouched
    assert_eq!(session.current(), &baseline());

    // navigate to page2: nothing rendered there for this table, but the
    // session state persists
    run_page(&mut store, "page2", &mut tokens, &mut widget);

    // back to page1: the transition folds the log in, exactly once
    let session = run_page(&mut store, "page1", &mut tokens, &mut widget);
    assert!(session.log().is_empty());
    assert_eq!(
        session.current().column("a").unwrap(),
        &[Value::from(2), Value::from(3)][..]
    );
    assert_eq!(
        session.current().column("b").unwrap(),
        &[Value::from(50), Value::from(6)][..]
    );
    // no token refresh on the revisit: the widget instance survives
    assert_eq!(session.reset_token(), original_token);
    assert_eq!(widget.last_identity(), Some(original_token.as_str()));
}

#[test]
fn reconciled_table_reaches_the_widget_on_the_revisit() {
    let mut store = StateStore::new();
    let mut tokens = SequentialTokenSource::new();
    let mut widget = RecordingWidget::new();

    run_page(&mut store, "page1", &mut tokens, &mut widget);
    widget.report_on_next_render(EditLog {
        added: vec![row(&[("a", 9.into()), ("b", 9.into())])],
        ..EditLog::new()
    });
    run_page(&mut store, "page1", &mut tokens, &mut widget);
    run_page(&mut store, "page2", &mut tokens, &mut widget);
    run_page(&mut store, "page1", &mut tokens, &mut widget);

    // page1 renders saw 3, 3, then 4 rows once the appended row folded in
    let rows: Vec<usize> = widget.renders.iter().map(|(_, rows)| *rows).collect();
    assert_eq!(rows, vec![3, 3, 4]);
}

#[test]
fn reset_button_mints_a_fresh_token_and_restores_the_baseline() {
    let mut store = StateStore::new();
    let mut tokens = SequentialTokenSource::new();
    let mut widget = RecordingWidget::new();

    run_page(&mut store, "page1", &mut tokens, &mut widget);
    widget.report_on_next_render(EditLog {
        deleted: BTreeSet::from([0, 1, 2]),
        ..EditLog::new()
    });
    run_page(&mut store, "page1", &mut tokens, &mut widget);

    // the reset button's click handler runs before the next render
    let (mut session, mut nav) = load_state(&mut store, "page1", &mut tokens);
    let token_before = session.reset_token().to_string();
    session.reset(&mut tokens, None);
    assert_ne!(session.reset_token(), token_before);
    assert_eq!(session.current(), &baseline());
    assert!(session.log().is_empty());
    session.render(&mut widget, RowPolicy::Dynamic, &DisplayOptions::default());
    save_state(&mut store, &session, &mut nav);

    // the fresh identity reached the widget
    assert_eq!(widget.last_identity(), Some(session.reset_token()));
}

#[test]
fn sessions_round_trip_through_the_state_store() {
    let mut tokens = SequentialTokenSource::new();
    let mut session = EditorSession::new("df", baseline(), &mut tokens);
    session.record_edit(EditLog {
        edited: BTreeMap::from([(2, row(&[("a", 42.into())]))]),
        ..EditLog::new()
    });

    let mut store = StateStore::new();
    store.set(
        "df",
        serde_json::to_value(&session).unwrap(),
        Persistence::Persistent,
    );
    store.begin_activation();

    let back: EditorSession = serde_json::from_value(store.get("df").unwrap().clone()).unwrap();
    assert_eq!(back.name(), "df");
    assert_eq!(back.current(), session.current());
    assert_eq!(back.log(), session.log());
    assert_eq!(back.reset_token(), session.reset_token());
}
