//! User intents and the reducer that turns them into partial updates.

use crate::state::{AppState, Patch};
use crate::task::{IdSequence, Task, TaskId};

/// Every state transition the application can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The text field now holds `value`.
    SetInputText(String),
    /// Append a task titled with the current input text and clear the field.
    AddTask,
    /// Set `done` on the task with `id`.
    ToggleTask {
        /// Task to change.
        id: TaskId,
        /// New checkbox value.
        done: bool,
    },
    /// Drop the task with the given id.
    RemoveTask(TaskId),
}

impl Update {
    /// Short label for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetInputText(_) => "set_input_text",
            Self::AddTask => "add_task",
            Self::ToggleTask { .. } => "toggle_task",
            Self::RemoveTask(_) => "remove_task",
        }
    }
}

/// Computes the partial update for `update` against `state`.
///
/// `AddTask` draws one id from `ids`; no other intent touches the
/// sequence. Titles are taken verbatim, so a blank input still produces
/// a task. Toggling or removing an unknown id yields an unchanged list.
pub fn reduce(state: &AppState, ids: &mut IdSequence, update: Update) -> Patch {
    match update {
        Update::SetInputText(value) => Patch::empty().input_text(value),
        Update::AddTask => {
            let mut tasks = state.tasks.clone();
            tasks.push(Task::new(ids.next_id(), state.input_text.clone()));
            Patch::empty().tasks(tasks).input_text(String::new())
        }
        Update::ToggleTask { id, done } => Patch::empty().tasks(
            state
                .tasks
                .iter()
                .map(|t| if t.id == id { t.with_done(done) } else { t.clone() })
                .collect(),
        ),
        Update::RemoveTask(id) => {
            Patch::empty().tasks(state.tasks.iter().filter(|t| t.id != id).cloned().collect())
        }
    }
}
