//! Application state and partial updates.

use crate::task::{Task, TaskId};

/// Everything needed to render the UI at any instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Tasks in insertion order, which is also display order.
    pub tasks: Vec<Task>,
    /// Current content of the new-task text field.
    pub input_text: String,
}

impl AppState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks marked done.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Shallow-merges `patch` into this state.
    ///
    /// Fields present in the patch overwrite the current value; absent
    /// fields keep theirs.
    pub fn merge(&mut self, patch: Patch) {
        if let Some(tasks) = patch.tasks {
            self.tasks = tasks;
        }
        if let Some(input_text) = patch.input_text {
            self.input_text = input_text;
        }
    }
}

/// A partial [`AppState`]. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    /// Replacement task list.
    pub tasks: Option<Vec<Task>>,
    /// Replacement input text.
    pub input_text: Option<String>,
}

impl Patch {
    /// A patch that changes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the replacement task list.
    #[must_use]
    pub fn tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Sets the replacement input text.
    #[must_use]
    pub fn input_text(mut self, text: impl Into<String>) -> Self {
        self.input_text = Some(text.into());
        self
    }

    /// Whether the patch names no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_none() && self.input_text.is_none()
    }
}
