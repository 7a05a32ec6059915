//! The state container.
//!
//! `Store` is the single source of truth for [`AppState`]. Every
//! [`merge`](Store::merge) re-renders the whole view synchronously, even
//! when the patch changes nothing; there is no diffing at this level.

use crate::state::{AppState, Patch};
use crate::task::IdSequence;
use crate::update::{Update, reduce};

/// Something that can draw the application state.
///
/// The store calls [`render`](View::render) after every merge. Errors are
/// the renderer's own (terminal I/O and the like) and are handed back to
/// whoever triggered the merge.
pub trait View {
    /// Error produced while drawing.
    type Error;

    /// Draws `state` in full.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn render(&mut self, state: &AppState) -> Result<(), Self::Error>;
}

/// Owns the application state, the id sequence, and the view.
pub struct Store<V> {
    state: AppState,
    ids: IdSequence,
    view: V,
    revision: u64,
}

impl<V: View> Store<V> {
    /// Creates a store with empty state. Nothing is rendered until the
    /// first [`render`](Self::render) or merge.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            state: AppState::new(),
            ids: IdSequence::new(),
            view,
            revision: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn read(&self) -> &AppState {
        &self.state
    }

    /// Shallow-merges `patch` into the state, then renders.
    ///
    /// # Errors
    ///
    /// Returns the view's error if rendering fails. The merge itself has
    /// already been applied by then.
    pub fn merge(&mut self, patch: Patch) -> Result<(), V::Error> {
        tracing::debug!(
            tasks = patch.tasks.as_ref().map(Vec::len),
            input_changed = patch.input_text.is_some(),
            empty = patch.is_empty(),
            "merging patch"
        );
        self.state.merge(patch);
        self.revision += 1;
        self.render()
    }

    /// Reduces `update` against the current state and merges the result.
    ///
    /// # Errors
    ///
    /// Same as [`merge`](Self::merge).
    pub fn dispatch(&mut self, update: Update) -> Result<(), V::Error> {
        tracing::debug!(kind = update.kind(), revision = self.revision, "dispatch");
        let patch = reduce(&self.state, &mut self.ids, update);
        self.merge(patch)
    }

    /// Renders the current state without changing it.
    ///
    /// # Errors
    ///
    /// Returns the view's error if rendering fails.
    pub fn render(&mut self) -> Result<(), V::Error> {
        self.view.render(&self.state)
    }

    /// Number of merges applied since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Borrows the view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutably borrows the view, e.g. to move host focus.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
