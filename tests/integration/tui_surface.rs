//! Integration tests for drawing the task list into a terminal.
//!
//! # Verification Focus
//!
//! - Initial frame: heading, placeholder, empty counts
//! - One row per task, checkbox mirrors `done`
//! - Every merge redraws the screen
//! - Status bar and texts follow configuration
//! - Long lists scroll to keep the focused row visible
//! - Long titles and long input never push controls or the cursor off screen

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use todos::config::ClientConfig;
use todos::ui::{self, TerminalSurface};
use todos::view::ViewOptions;
use todos_core::{Patch, Store, Update};

type TestStore = Store<TerminalSurface<TestBackend>>;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_store_with(options: ViewOptions, status_bar: bool, width: u16, height: u16) -> TestStore {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let surface = TerminalSurface::new(terminal, options).with_status_bar(status_bar);
    let mut store = Store::new(surface);
    store.render().unwrap();
    store
}

fn make_store() -> TestStore {
    make_store_with(ViewOptions::default(), true, 60, 16)
}

/// The screen as one string per terminal row.
fn screen(store: &TestStore) -> Vec<String> {
    let buffer = store.view().terminal().backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen_text(store: &TestStore) -> String {
    screen(store).join("\n")
}

fn row_containing(store: &TestStore, needle: &str) -> String {
    screen(store)
        .into_iter()
        .find(|row| row.contains(needle))
        .unwrap_or_else(|| panic!("no row contains {needle:?}"))
}

fn press(store: &mut TestStore, code: KeyCode) {
    ui::handle_key(store, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

fn add(store: &mut TestStore, title: &str) {
    store.dispatch(Update::SetInputText(title.to_string())).unwrap();
    store.dispatch(Update::AddTask).unwrap();
}

// ===========================================================================
// Initial frame
// ===========================================================================

#[test]
fn initial_frame_shows_heading_and_placeholder() {
    let store = make_store();
    let rows = screen(&store);

    assert!(rows[0].starts_with("ToDos"), "heading row was {:?}", rows[0]);
    let text = screen_text(&store);
    assert!(text.contains("what we have to do?"));
    assert!(text.contains("New task"));
    assert!(text.contains("Tasks"));
    assert!(text.contains("0 of 0 done"));
}

// ===========================================================================
// Rows
// ===========================================================================

#[test]
fn added_task_is_drawn_as_open_row() {
    let mut store = make_store();
    add(&mut store, "Buy milk");

    let text = screen_text(&store);
    let row = row_containing(&store, "Buy milk");
    assert!(row.contains("[ ] Buy milk"), "row was {row:?}");
    assert!(row.contains('\u{d7}'), "row was {row:?}");
    assert!(text.contains("0 of 1 done"));
    // The cleared input shows the placeholder again.
    assert!(text.contains("what we have to do?"));
}

#[test]
fn done_task_shows_checked_box() {
    let mut store = make_store();
    add(&mut store, "Walk dog");
    let id = store.read().tasks[0].id;
    store
        .dispatch(Update::ToggleTask { id, done: true })
        .unwrap();

    let text = screen_text(&store);
    assert!(text.contains("[x] Walk dog"), "screen:\n{text}");
    assert!(text.contains("1 of 1 done"));
}

#[test]
fn rows_appear_in_list_order() {
    let mut store = make_store();
    for title in ["first", "second", "third"] {
        add(&mut store, title);
    }

    let rows = screen(&store);
    let position = |needle: &str| rows.iter().position(|r| r.contains(needle)).unwrap();
    assert!(position("first") < position("second"));
    assert!(position("second") < position("third"));
}

#[test]
fn removed_task_disappears() {
    let mut store = make_store();
    add(&mut store, "keep");
    add(&mut store, "drop");
    let id = store.read().tasks[1].id;
    store.dispatch(Update::RemoveTask(id)).unwrap();

    let text = screen_text(&store);
    assert!(text.contains("keep"));
    assert!(!text.contains("drop"));
}

#[test]
fn typed_text_replaces_placeholder() {
    let mut store = make_store();
    store.merge(Patch::empty().input_text("Call mom")).unwrap();

    let text = screen_text(&store);
    assert!(text.contains("Call mom"));
    assert!(!text.contains("what we have to do?"));
}

// ===========================================================================
// Configuration
// ===========================================================================

#[test]
fn configured_texts_are_drawn() {
    let config = ClientConfig {
        heading: "Groceries".to_string(),
        placeholder: "add an item".to_string(),
        show_status_bar: false,
    };
    let store = make_store_with(config.to_view_options(), config.show_status_bar, 60, 16);

    let text = screen_text(&store);
    assert!(screen(&store)[0].starts_with("Groceries"));
    assert!(text.contains("add an item"));
    assert!(!text.contains("done"), "status bar should be hidden");
}

// ===========================================================================
// Scrolling
// ===========================================================================

#[test]
fn long_list_scrolls_to_focused_row() {
    // 12 rows: heading 1, input 3, status 1, task list 7 (5 inside the border).
    let mut store = make_store_with(ViewOptions::default(), true, 60, 12);
    for i in 0..8 {
        add(&mut store, &format!("task {i}"));
    }
    let text = screen_text(&store);
    assert!(text.contains("task 0"));
    assert!(!text.contains("task 7"));

    // Wrap focus backwards onto the last task's remove control.
    press(&mut store, KeyCode::BackTab);

    let text = screen_text(&store);
    assert!(text.contains("task 7"), "screen:\n{text}");
    assert!(!text.contains("task 0"), "screen:\n{text}");
}

// ===========================================================================
// Narrow terminals
// ===========================================================================

#[test]
fn long_title_keeps_remove_control_visible() {
    let mut store = make_store_with(ViewOptions::default(), true, 40, 12);
    let title = "a".repeat(60);
    add(&mut store, &title);

    // input -> checkbox -> remove control
    press(&mut store, KeyCode::Tab);
    press(&mut store, KeyCode::Tab);

    let row = row_containing(&store, "[ ] aaaa");
    assert!(row.contains('\u{d7}'), "row was {row:?}");
    assert!(!row.contains(&title), "title should be clipped: {row:?}");
}

#[test]
fn long_input_scrolls_to_keep_cursor_visible() {
    let mut store = make_store_with(ViewOptions::default(), true, 40, 12);
    for c in "abcdefghij".repeat(6).chars() {
        press(&mut store, KeyCode::Char(c));
    }
    assert_eq!(store.read().input_text.chars().count(), 60);

    let text = screen_text(&store);
    assert!(text.contains("hij\u{2588}"), "screen:\n{text}");

    // Home brings the start of the text back into view.
    press(&mut store, KeyCode::Home);
    let text = screen_text(&store);
    assert!(text.contains("\u{2588}abcdefghij"), "screen:\n{text}");
}
