//! State container for the `Todos` task list.
//!
//! Holds the application state, the id sequence, and the reducer that
//! turns user intents into partial state updates. Rendering is delegated
//! to a [`store::View`] supplied by the host.

pub mod state;
pub mod store;
pub mod task;
pub mod update;

pub use state::{AppState, Patch};
pub use store::{Store, View};
pub use task::{IdSequence, Task, TaskId};
pub use update::{Update, reduce};
