//! Integration tests for the state container contract.
//!
//! # Verification Focus
//!
//! - Adding via the add intent appends one open task and clears the input
//! - Blank titles are accepted
//! - Toggle and remove leave other tasks untouched and in order
//! - Ids increase across removals
//! - `read` has no side effects
//! - Every merge renders exactly once, changed or not

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::convert::Infallible;

use todos_core::{AppState, Patch, Store, TaskId, Update, View};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Records a copy of every state it is asked to render.
#[derive(Default)]
struct Recorder {
    frames: Vec<AppState>,
}

impl View for Recorder {
    type Error = Infallible;

    fn render(&mut self, state: &AppState) -> Result<(), Infallible> {
        self.frames.push(state.clone());
        Ok(())
    }
}

/// A view whose renders always fail.
struct Broken;

impl View for Broken {
    type Error = &'static str;

    fn render(&mut self, _state: &AppState) -> Result<(), &'static str> {
        Err("surface gone")
    }
}

fn store() -> Store<Recorder> {
    Store::new(Recorder::default())
}

/// Types `title` and presses Enter.
fn add(store: &mut Store<Recorder>, title: &str) -> TaskId {
    let Ok(()) = store.dispatch(Update::SetInputText(title.to_string()));
    let Ok(()) = store.dispatch(Update::AddTask);
    store.read().tasks.last().expect("task was just added").id
}

// ===========================================================================
// Adding
// ===========================================================================

#[test]
fn enter_adds_buy_milk() {
    let mut store = store();
    let before = store.read().tasks.len();

    add(&mut store, "Buy milk");

    let state = store.read();
    assert_eq!(state.tasks.len(), before + 1);
    let task = state.tasks.last().unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.done);
    assert_eq!(state.input_text, "");
}

#[test]
fn empty_input_still_adds_a_task() {
    let mut store = store();
    let Ok(()) = store.dispatch(Update::AddTask);

    assert_eq!(store.read().tasks.len(), 1);
    assert_eq!(store.read().tasks[0].title, "");
}

#[test]
fn add_is_a_single_merge() {
    let mut store = store();
    let Ok(()) = store.dispatch(Update::SetInputText("a".into()));
    let revision = store.revision();
    let Ok(()) = store.dispatch(Update::AddTask);
    assert_eq!(store.revision(), revision + 1);

    // The one frame already shows both the new task and the cleared input.
    let frame = store.view().frames.last().unwrap();
    assert_eq!(frame.tasks.len(), 1);
    assert!(frame.input_text.is_empty());
}

// ===========================================================================
// Toggling and removing
// ===========================================================================

#[test]
fn toggle_leaves_others_identical() {
    let mut store = store();
    let ids: Vec<TaskId> = ["a", "b", "c"].iter().map(|t| add(&mut store, t)).collect();
    let before = store.read().tasks.clone();

    let Ok(()) = store.dispatch(Update::ToggleTask {
        id: ids[1],
        done: true,
    });

    let after = &store.read().tasks;
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert!(after[1].done);
    assert_eq!(after[1].id, ids[1]);

    let Ok(()) = store.dispatch(Update::ToggleTask {
        id: ids[1],
        done: false,
    });
    assert_eq!(store.read().tasks, before);
}

#[test]
fn remove_drops_only_that_id() {
    let mut store = store();
    let ids: Vec<TaskId> = ["a", "b", "c", "d"]
        .iter()
        .map(|t| add(&mut store, t))
        .collect();

    let Ok(()) = store.dispatch(Update::RemoveTask(ids[2]));

    let state = store.read();
    assert_eq!(state.tasks.len(), 3);
    assert!(state.task(ids[2]).is_none());
    let remaining: Vec<TaskId> = state.tasks.iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[1], ids[3]]);
}

#[test]
fn removing_unknown_id_keeps_list() {
    let mut store = store();
    add(&mut store, "a");
    let before = store.read().tasks.clone();
    let Ok(()) = store.dispatch(Update::RemoveTask(TaskId::from_raw(1_000)));
    assert_eq!(store.read().tasks, before);
}

// ===========================================================================
// Id sequence
// ===========================================================================

#[test]
fn ids_never_reused_after_removals() {
    let mut store = store();
    let mut seen = Vec::new();
    for round in 0..5 {
        let id = add(&mut store, &format!("task {round}"));
        if let Some(&last) = seen.last() {
            assert!(id > last, "id {id} should exceed {last}");
        }
        seen.push(id);
        let Ok(()) = store.dispatch(Update::RemoveTask(id));
    }
    assert!(store.read().tasks.is_empty());
}

// ===========================================================================
// read / merge contract
// ===========================================================================

#[test]
fn read_twice_is_identical() {
    let mut store = store();
    add(&mut store, "a");
    let frames = store.view().frames.len();

    let first = store.read().clone();
    let second = store.read().clone();

    assert_eq!(first, second);
    assert_eq!(store.view().frames.len(), frames, "read must not render");
}

#[test]
fn merging_same_input_twice_equals_once() {
    let mut once = store();
    let Ok(()) = once.merge(Patch::empty().input_text("x"));

    let mut twice = store();
    let Ok(()) = twice.merge(Patch::empty().input_text("x"));
    let Ok(()) = twice.merge(Patch::empty().input_text("x"));

    assert_eq!(once.read().input_text, twice.read().input_text);
}

#[test]
fn every_merge_renders_even_unchanged() {
    let mut store = store();
    let Ok(()) = store.merge(Patch::empty().input_text("x"));
    let Ok(()) = store.merge(Patch::empty().input_text("x"));
    let Ok(()) = store.merge(Patch::empty());

    assert_eq!(store.view().frames.len(), 3);
    assert!(store.view().frames.iter().all(|f| f.input_text == "x"));
}

#[test]
fn partial_merge_keeps_other_fields() {
    let mut store = store();
    add(&mut store, "keep me");
    let Ok(()) = store.merge(Patch::empty().input_text("draft"));

    assert_eq!(store.read().tasks.len(), 1);
    assert_eq!(store.read().input_text, "draft");
}

#[test]
fn render_error_is_returned_after_merge_applies() {
    let mut store = Store::new(Broken);
    let result = store.dispatch(Update::SetInputText("x".into()));

    assert_eq!(result, Err("surface gone"));
    assert_eq!(store.read().input_text, "x");
    assert_eq!(store.revision(), 1);
}
