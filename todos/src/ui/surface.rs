//! The live terminal surface.
//!
//! `TerminalSurface` is the store's [`View`]: every render rebuilds the
//! element tree from state, keeps it so key events can reach its
//! callbacks, and draws it. `Terminal::draw` only writes cells that
//! differ from the previous frame.

use std::io;

use crossterm::event::KeyEvent;
use ratatui::{Terminal, backend::Backend};
use todos_core::{AppState, Store, View};

use super::DrawContext;
use crate::app::{App, KeyOutcome};
use crate::view::{self, Element, ViewOptions};

/// Draws the application into a ratatui terminal.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    options: ViewOptions,
    show_status_bar: bool,
    app: App,
    tree: Option<Element>,
}

impl<B: Backend> TerminalSurface<B> {
    /// Wrap `terminal`. Nothing is drawn until the first render.
    #[must_use]
    pub fn new(terminal: Terminal<B>, options: ViewOptions) -> Self {
        Self {
            terminal,
            options,
            show_status_bar: true,
            app: App::new(),
            tree: None,
        }
    }

    /// Toggle the status bar.
    #[must_use]
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Host-side focus and cursor state.
    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// The tree drawn by the last render.
    #[must_use]
    pub const fn tree(&self) -> Option<&Element> {
        self.tree.as_ref()
    }

    /// The underlying terminal.
    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The underlying terminal, mutably (cursor and screen restore).
    pub const fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Route a key to the last rendered tree.
    ///
    /// Keys arriving before the first render are dropped.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyOutcome {
        match &self.tree {
            Some(tree) => self.app.handle_key_event(tree, key),
            None => KeyOutcome::default(),
        }
    }
}

impl<B: Backend> View for TerminalSurface<B> {
    type Error = io::Error;

    fn render(&mut self, state: &AppState) -> io::Result<()> {
        let tree = view::root(state, &self.options);
        self.app.sync(&tree);

        let ctx = DrawContext {
            focus: self.app.focus,
            cursor: self.app.cursor_position,
            focus_kind: self.app.focus_kind(&tree),
            show_status_bar: self.show_status_bar,
        };
        self.terminal
            .draw(|frame| super::draw(frame, &tree, state, &ctx))?;

        self.tree = Some(tree);
        Ok(())
    }
}

/// Handle one key press end to end.
///
/// Intents produced by the key are dispatched in order, each one merging
/// and re-rendering. A key that only moves focus or the cursor redraws
/// without touching application state.
///
/// # Errors
///
/// Returns any terminal I/O error raised while rendering.
pub fn handle_key<B: Backend>(
    store: &mut Store<TerminalSurface<B>>,
    key: KeyEvent,
) -> io::Result<()> {
    let outcome = store.view_mut().handle_key_event(key);
    if outcome.quit {
        return Ok(());
    }

    if outcome.updates.is_empty() {
        if outcome.redraw {
            store.render()?;
        }
        return Ok(());
    }

    for update in outcome.updates {
        tracing::debug!(kind = update.kind(), "key produced intent");
        store.dispatch(update)?;
    }
    Ok(())
}
