//! Host-side UI state and key routing.
//!
//! Focus and the text cursor belong to the live UI, not to the
//! application state: moving them never goes through the store. Keys are
//! routed to the callbacks of the focused element of the last rendered
//! tree, and whatever intents those callbacks return are handed back to
//! the caller for dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todos_core::Update;

use crate::view::{Element, Focusable, TextInput};

/// Kind of the focused element, for key help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    /// The new-task text field.
    Input,
    /// A task checkbox.
    Checkbox,
    /// A remove control.
    Button,
}

/// What a key press asks the host to do.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Intents to dispatch, in order.
    pub updates: Vec<Update>,
    /// Host state changed and the screen should be redrawn.
    pub redraw: bool,
    /// The user asked to leave.
    pub quit: bool,
}

impl KeyOutcome {
    const fn redraw() -> Self {
        Self {
            updates: Vec::new(),
            redraw: true,
            quit: false,
        }
    }

    fn dispatch(update: Update) -> Self {
        Self {
            updates: vec![update],
            redraw: true,
            quit: false,
        }
    }
}

/// Focus and cursor of the terminal UI.
#[derive(Debug, Default)]
pub struct App {
    /// Index into the tab order of the rendered tree.
    pub focus: usize,
    /// Cursor position in the text field (character index).
    pub cursor_position: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create host state with the text field focused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            focus: 0,
            cursor_position: 0,
            should_quit: false,
        }
    }

    /// Clamp focus and cursor to a freshly rendered tree.
    pub fn sync(&mut self, tree: &Element) {
        let focusables = tree.focusables();
        self.focus = self.focus.min(focusables.len().saturating_sub(1));
        let input_len = focusables
            .iter()
            .find_map(|f| match f {
                Focusable::Input(input) => Some(input.value.chars().count()),
                _ => None,
            })
            .unwrap_or(0);
        self.cursor_position = self.cursor_position.min(input_len);
    }

    /// Kind of the focused element in `tree`.
    #[must_use]
    pub fn focus_kind(&self, tree: &Element) -> Option<FocusKind> {
        tree.focusables().get(self.focus).map(|f| match f {
            Focusable::Input(_) => FocusKind::Input,
            Focusable::Checkbox(_) => FocusKind::Checkbox,
            Focusable::Button(_) => FocusKind::Button,
        })
    }

    /// Handle a key event against the last rendered tree.
    pub fn handle_key_event(&mut self, tree: &Element, key: KeyEvent) -> KeyOutcome {
        let focusables = tree.focusables();

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return KeyOutcome {
                    quit: true,
                    ..KeyOutcome::default()
                };
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab | KeyCode::Up, _) => {
                self.cycle_focus_backward(focusables.len());
                return KeyOutcome::redraw();
            }
            (KeyCode::Tab | KeyCode::Down, _) => {
                self.cycle_focus_forward(focusables.len());
                return KeyOutcome::redraw();
            }
            _ => {}
        }

        match focusables.get(self.focus) {
            Some(Focusable::Input(input)) => self.handle_input_key(input, key),
            Some(Focusable::Checkbox(checkbox)) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    KeyOutcome::dispatch((checkbox.on_change)(!checkbox.checked))
                }
                _ => KeyOutcome::default(),
            },
            Some(Focusable::Button(button)) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Delete => {
                    KeyOutcome::dispatch((button.on_click)(()))
                }
                _ => KeyOutcome::default(),
            },
            None => KeyOutcome::default(),
        }
    }

    /// Handle a key while the text field is focused.
    ///
    /// The key is offered to `on_key_press` first; edits then report the
    /// field's new content through `on_input`. The field itself is never
    /// changed here: its value comes back from state on the next render.
    fn handle_input_key(&mut self, input: &TextInput, key: KeyEvent) -> KeyOutcome {
        let mut updates: Vec<Update> = (input.on_key_press)(key).into_iter().collect();

        let len = input.value.chars().count();
        self.cursor_position = self.cursor_position.min(len);

        let edited = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let value = insert_char(&input.value, self.cursor_position, c);
                self.cursor_position += 1;
                Some(value)
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.cursor_position -= 1;
                Some(remove_char(&input.value, self.cursor_position))
            }
            KeyCode::Delete if self.cursor_position < len => {
                Some(remove_char(&input.value, self.cursor_position))
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = len;
                None
            }
            _ => None,
        };

        if let Some(value) = edited {
            updates.push((input.on_input)(value));
        }

        KeyOutcome {
            updates,
            redraw: true,
            quit: false,
        }
    }

    /// Cycle focus forward through `count` focusable elements.
    const fn cycle_focus_forward(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Cycle focus backward through `count` focusable elements.
    const fn cycle_focus_backward(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }
}

/// Byte offset of the `char_idx`-th character, or the end of `s`.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

fn insert_char(value: &str, char_idx: usize, c: char) -> String {
    let mut out = value.to_string();
    out.insert(byte_index(value, char_idx), c);
    out
}

fn remove_char(value: &str, char_idx: usize) -> String {
    let mut out = value.to_string();
    let at = byte_index(value, char_idx);
    if at < out.len() {
        out.remove(at);
    }
    out
}
