//! Declarative UI description.
//!
//! The view is a plain tree of [`Element`]s derived from the application
//! state. Interactive elements carry callbacks that return an [`Update`]
//! instead of touching state; the host collects those intents and hands
//! them to the store.

pub mod components;

use std::fmt;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use todos_core::Update;

pub use components::{ViewOptions, new_task, root, task_list, task_row};

/// A view callback: maps an event payload to an intent.
pub type Callback<A, R = Update> = Rc<dyn Fn(A) -> R>;

/// One node of the UI description.
#[derive(Debug)]
pub enum Element {
    /// Children stacked vertically.
    Column(Container),
    /// Children laid out on one line.
    Row(Row),
    /// A title line.
    Heading(String),
    /// Static text.
    Label(String),
    /// Single-line text field.
    TextInput(TextInput),
    /// A boolean toggle.
    Checkbox(Checkbox),
    /// A clickable control.
    Button(Button),
}

/// Vertical container.
#[derive(Debug, Default)]
pub struct Container {
    /// Style class, looked up in the theme.
    pub class: &'static str,
    /// Border title. A titled container is drawn with a border.
    pub title: Option<String>,
    /// Take the remaining vertical space instead of fitting the children.
    pub grow: bool,
    /// Child elements, top to bottom.
    pub children: Vec<Element>,
}

/// Horizontal container occupying a single line.
#[derive(Debug, Default)]
pub struct Row {
    /// Style classes; every class present contributes to the row style.
    pub classes: Vec<&'static str>,
    /// Child elements, left to right.
    pub children: Vec<Element>,
}

impl Row {
    /// Whether the row carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }
}

/// Controlled text field: `value` is always the state's input text.
pub struct TextInput {
    /// Displayed content.
    pub value: String,
    /// Hint shown while `value` is empty.
    pub placeholder: String,
    /// Called with the field's new content after an edit.
    pub on_input: Callback<String>,
    /// Called for every key pressed while the field has focus.
    pub on_key_press: Callback<KeyEvent, Option<Update>>,
}

/// Checkbox bound to a boolean.
pub struct Checkbox {
    /// Current value.
    pub checked: bool,
    /// Called with the requested new value.
    pub on_change: Callback<bool>,
}

/// Clickable control with a short label.
pub struct Button {
    /// Text drawn for the control.
    pub label: String,
    /// Called when the control is activated.
    pub on_click: Callback<()>,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A reference to an element that can take keyboard focus.
#[derive(Debug, Clone, Copy)]
pub enum Focusable<'a> {
    /// The new-task text field.
    Input(&'a TextInput),
    /// A task checkbox.
    Checkbox(&'a Checkbox),
    /// A remove control.
    Button(&'a Button),
}

impl Element {
    /// Focusable elements in document order (the tab order).
    #[must_use]
    pub fn focusables(&self) -> Vec<Focusable<'_>> {
        let mut out = Vec::new();
        self.collect_focusables(&mut out);
        out
    }

    fn collect_focusables<'a>(&'a self, out: &mut Vec<Focusable<'a>>) {
        match self {
            Self::Column(c) => c.children.iter().for_each(|e| e.collect_focusables(out)),
            Self::Row(r) => r.children.iter().for_each(|e| e.collect_focusables(out)),
            Self::TextInput(input) => out.push(Focusable::Input(input)),
            Self::Checkbox(cb) => out.push(Focusable::Checkbox(cb)),
            Self::Button(b) => out.push(Focusable::Button(b)),
            Self::Heading(_) | Self::Label(_) => {}
        }
    }

    /// Rows of the tree in document order.
    #[must_use]
    pub fn rows(&self) -> Vec<&Row> {
        match self {
            Self::Column(c) => c.children.iter().flat_map(Self::rows).collect(),
            Self::Row(r) => vec![r],
            _ => Vec::new(),
        }
    }
}
