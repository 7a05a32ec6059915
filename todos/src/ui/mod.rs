//! Terminal UI rendering.

pub mod element;
pub mod status_bar;
pub mod surface;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use todos_core::AppState;

use crate::app::FocusKind;
use crate::view::Element;

pub use surface::{TerminalSurface, handle_key};

/// Host state the drawing code needs besides the tree itself.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext {
    /// Tab-order index of the focused element.
    pub focus: usize,
    /// Text cursor, as a character index into the input value.
    pub cursor: usize,
    /// Kind of the focused element, if any.
    pub focus_kind: Option<FocusKind>,
    /// Whether to draw the status bar.
    pub show_status_bar: bool,
}

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, tree: &Element, state: &AppState, ctx: &DrawContext) {
    let status_height = u16::from(ctx.show_status_bar);

    // Content above, status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(status_height)])
        .split(frame.area());

    element::render(frame, main_chunks[0], tree, ctx);

    if ctx.show_status_bar {
        status_bar::render(frame, main_chunks[1], state, ctx);
    }
}
