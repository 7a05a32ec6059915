//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use todos_core::AppState;

use super::{DrawContext, theme};
use crate::app::FocusKind;

/// Key help for the focused element.
#[must_use]
pub const fn help_text(focus: Option<FocusKind>) -> &'static str {
    match focus {
        Some(FocusKind::Input) | None => "Enter: add | Tab/↓: tasks | ←→: move cursor | Esc: quit",
        Some(FocusKind::Checkbox) => "Space/Enter: toggle | Tab/↑↓: navigate | Esc: quit",
        Some(FocusKind::Button) => "Space/Enter/Del: remove | Tab/↑↓: navigate | Esc: quit",
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, ctx: &DrawContext) {
    let total = state.tasks.len();
    let done = state.done_count();
    let dot_color = if done == total {
        theme::SUCCESS
    } else {
        theme::WARNING
    };

    let status_line = Line::from(vec![
        Span::styled(concat!("Todos v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(dot_color)),
        Span::raw(format!(" {done} of {total} done")),
        Span::raw(" | "),
        Span::styled(help_text(ctx.focus_kind), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
