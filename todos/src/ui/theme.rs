//! Theme and styling constants for the TUI.
//!
//! Element classes from the view are mapped to styles here, the way a
//! stylesheet maps CSS classes.

use ratatui::style::{Color, Modifier, Style};

use crate::view::components::CLASS_DONE;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Progress indicator color when everything is done.
pub const SUCCESS: Color = Color::Green;

/// Progress indicator color while tasks remain.
pub const WARNING: Color = Color::Yellow;

/// Color of the remove control.
pub const REMOVE: Color = Color::Red;

/// Heading color.
pub const HEADING: Color = Color::LightMagenta;

/// Panel title color for the task list.
pub const TASKS_TITLE: Color = Color::Green;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, key help).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Focused control style.
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the heading line.
#[must_use]
pub fn heading() -> Style {
    panel_title(HEADING)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the remove control when it is not focused.
#[must_use]
pub fn remove_control() -> Style {
    Style::default().fg(REMOVE)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for a task row carrying `classes`.
///
/// Finished tasks are dimmed and crossed out.
#[must_use]
pub fn row(classes: &[&str]) -> Style {
    if classes.contains(&CLASS_DONE) {
        dimmed().add_modifier(Modifier::CROSSED_OUT)
    } else {
        normal()
    }
}
