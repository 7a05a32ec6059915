//! View functions: state in, element tree out.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use todos_core::{AppState, Task, TaskId, Update};

use super::{Button, Callback, Checkbox, Container, Element, Row, TextInput};

/// Class of the root column.
pub const CLASS_APP: &str = "app";
/// Class of the new-task container.
pub const CLASS_NEW_TASK: &str = "new-task";
/// Class of the task list container.
pub const CLASS_TASK_LIST: &str = "task-list";
/// Class carried by every task row.
pub const CLASS_TASK: &str = "task";
/// Extra class carried by rows of finished tasks.
pub const CLASS_DONE: &str = "done";

/// Label drawn for the remove control.
pub const REMOVE_LABEL: &str = "\u{d7}";

/// Texts the root view needs that do not come from state.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Heading above the input.
    pub heading: String,
    /// Placeholder of the empty input.
    pub placeholder: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            heading: "ToDos".to_string(),
            placeholder: "what we have to do?".to_string(),
        }
    }
}

/// One task: checkbox, title, remove control.
///
/// The `done` class is a pure function of `task.done`.
#[must_use]
pub fn task_row(task: &Task, on_check: Callback<bool>, on_remove: Callback<()>) -> Element {
    let mut classes = vec![CLASS_TASK];
    if task.done {
        classes.push(CLASS_DONE);
    }

    Element::Row(Row {
        classes,
        children: vec![
            Element::Checkbox(Checkbox {
                checked: task.done,
                on_change: on_check,
            }),
            Element::Label(task.title.clone()),
            Element::Button(Button {
                label: REMOVE_LABEL.to_string(),
                on_click: on_remove,
            }),
        ],
    })
}

/// All tasks, one row each, in list order.
///
/// Each row's callbacks are bound to that row's task id.
#[must_use]
pub fn task_list(
    tasks: &[Task],
    on_check: Callback<(TaskId, bool)>,
    on_remove: Callback<TaskId>,
) -> Element {
    let children = tasks
        .iter()
        .map(|task| {
            let id = task.id;
            let on_check = Rc::clone(&on_check);
            let on_remove = Rc::clone(&on_remove);
            task_row(
                task,
                Rc::new(move |done: bool| on_check((id, done))),
                Rc::new(move |(): ()| on_remove(id)),
            )
        })
        .collect();

    Element::Column(Container {
        class: CLASS_TASK_LIST,
        title: Some("Tasks".to_string()),
        grow: true,
        children,
    })
}

/// The add-task text field. Its value is always `input_text`.
#[must_use]
pub fn new_task(
    input_text: &str,
    placeholder: &str,
    on_input: Callback<String>,
    on_key_press: Callback<KeyEvent, Option<Update>>,
) -> Element {
    Element::Column(Container {
        class: CLASS_NEW_TASK,
        title: None,
        grow: false,
        children: vec![Element::TextInput(TextInput {
            value: input_text.to_string(),
            placeholder: placeholder.to_string(),
            on_input,
            on_key_press,
        })],
    })
}

/// The whole UI for `state`: heading, input, then the task list.
#[must_use]
pub fn root(state: &AppState, options: &ViewOptions) -> Element {
    let input = new_task(
        &state.input_text,
        &options.placeholder,
        Rc::new(Update::SetInputText),
        Rc::new(|key: KeyEvent| (key.code == KeyCode::Enter).then_some(Update::AddTask)),
    );
    let list = task_list(
        &state.tasks,
        Rc::new(|(id, done): (TaskId, bool)| Update::ToggleTask { id, done }),
        Rc::new(Update::RemoveTask),
    );

    Element::Column(Container {
        class: CLASS_APP,
        title: None,
        grow: true,
        children: vec![Element::Heading(options.heading.clone()), input, list],
    })
}
