//! Task model and id generation.

/// Unique identifier for a task within a session.
///
/// Ids come from an [`IdSequence`] and are never reused, so ordering by
/// id is ordering by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Session-unique identifier.
    pub id: TaskId,
    /// Title as typed by the user. May be empty.
    pub title: String,
    /// Whether the task has been checked off.
    pub done: bool,
}

impl Task {
    /// Creates an open (not done) task.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Returns a copy of this task with `done` replaced.
    #[must_use]
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }
}

/// Strictly increasing source of [`TaskId`]s.
///
/// Owned by the store. The counter is never reset, so an id handed out
/// once is never handed out again, whatever happens to the task list.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first id is `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Hands out the next id.
    pub const fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}
