//! Drawing of the element tree.
//!
//! Walks the tree in document order, counting focusable elements as it
//! goes so the focused control can be highlighted. Task lists taller
//! than their area scroll to keep the focused row visible.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{DrawContext, theme};
use crate::view::{Container, Element, Row, TextInput};

/// Vertical space an element asks for.
fn constraint(element: &Element) -> Constraint {
    match element {
        Element::Column(c) if c.grow => Constraint::Fill(1),
        Element::Column(c) => Constraint::Length(height(c)),
        Element::TextInput(_) => Constraint::Length(3),
        Element::Row(_)
        | Element::Heading(_)
        | Element::Label(_)
        | Element::Checkbox(_)
        | Element::Button(_) => Constraint::Length(1),
    }
}

/// Natural height of a non-growing column.
fn height(container: &Container) -> u16 {
    let border = if container.title.is_some() { 2 } else { 0 };
    container
        .children
        .iter()
        .map(|child| match constraint(child) {
            Constraint::Length(h) => h,
            _ => 1,
        })
        .fold(border, u16::saturating_add)
}

/// Render `tree` into `area`.
pub fn render(frame: &mut Frame, area: Rect, tree: &Element, ctx: &DrawContext) {
    let mut walker = Walker { ctx, next: 0 };
    walker.element(frame, area, tree);
}

struct Walker<'a> {
    ctx: &'a DrawContext,
    /// Tab-order index of the next focusable element to be visited.
    next: usize,
}

impl Walker<'_> {
    /// Claim the next tab-order slot and report whether it has focus.
    const fn take_focus(&mut self) -> bool {
        let focused = self.next == self.ctx.focus;
        self.next += 1;
        focused
    }

    fn element(&mut self, frame: &mut Frame, area: Rect, element: &Element) {
        match element {
            Element::Column(c) => self.column(frame, area, c),
            Element::Row(r) => self.row(frame, area, r),
            Element::Heading(text) => {
                let line = Line::from(Span::styled(text.as_str(), theme::heading()));
                frame.render_widget(Paragraph::new(line), area);
            }
            Element::Label(text) => {
                frame.render_widget(Paragraph::new(text.as_str()).style(theme::normal()), area);
            }
            Element::TextInput(input) => self.text_input(frame, area, input),
            Element::Checkbox(_) | Element::Button(_) => {
                let line = Line::from(self.inline(element, theme::normal()));
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }

    fn column(&mut self, frame: &mut Frame, area: Rect, container: &Container) {
        let inner = if let Some(title) = &container.title {
            let start = self.next;
            let count = container
                .children
                .iter()
                .map(|c| c.focusables().len())
                .sum::<usize>();
            let has_focus = (start..start + count).contains(&self.ctx.focus);

            let block = Block::default()
                .title(Span::styled(
                    title.as_str(),
                    theme::panel_title(theme::TASKS_TITLE),
                ))
                .borders(Borders::ALL)
                .border_style(if has_focus {
                    theme::highlighted()
                } else {
                    theme::normal()
                });
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        } else {
            area
        };

        if container.grow && container.children.iter().all(|c| matches!(c, Element::Row(_))) {
            self.scrolled_rows(frame, inner, &container.children);
            return;
        }

        let constraints: Vec<Constraint> = container.children.iter().map(constraint).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (child, chunk) in container.children.iter().zip(chunks.iter()) {
            self.element(frame, *chunk, child);
        }
    }

    /// One line per row, scrolled so the focused row stays in view.
    fn scrolled_rows(&mut self, frame: &mut Frame, area: Rect, rows: &[Element]) {
        let visible = usize::from(area.height);
        let mut focused_row = None;
        let mut slot = self.next;
        for (idx, row) in rows.iter().enumerate() {
            let count = row.focusables().len();
            if (slot..slot + count).contains(&self.ctx.focus) {
                focused_row = Some(idx);
            }
            slot += count;
        }
        let offset = match focused_row {
            Some(idx) if idx >= visible => idx + 1 - visible,
            _ => 0,
        };

        for (idx, row) in rows.iter().enumerate() {
            let shown = idx >= offset && idx - offset < visible;
            if !shown {
                self.next += row.focusables().len();
                continue;
            }
            let line_area = Rect {
                y: area.y + u16::try_from(idx - offset).unwrap_or(u16::MAX),
                height: 1,
                ..area
            };
            self.element(frame, line_area, row);
        }
    }

    /// A task row: checkbox, title, remove control on one line.
    ///
    /// Controls keep their natural width and text fills what is left, so
    /// a long title is clipped before the remove control is.
    fn row(&mut self, frame: &mut Frame, area: Rect, row: &Row) {
        let style = theme::row(&row.classes);
        let cells: Vec<Line<'static>> = row
            .children
            .iter()
            .map(|child| Line::from(self.inline(child, style)))
            .collect();
        let constraints: Vec<Constraint> = row
            .children
            .iter()
            .zip(&cells)
            .map(|(child, line)| match child {
                Element::Label(_) | Element::Heading(_) => Constraint::Fill(1),
                _ => Constraint::Length(u16::try_from(line.width()).unwrap_or(u16::MAX)),
            })
            .collect();
        let chunks = Layout::horizontal(constraints).split(area);

        for (line, chunk) in cells.into_iter().zip(chunks.iter()) {
            frame.render_widget(Paragraph::new(line), *chunk);
        }
    }

    /// Spans for an element drawn inside a line.
    fn inline(&mut self, element: &Element, row_style: Style) -> Vec<Span<'static>> {
        match element {
            Element::Checkbox(cb) => {
                let mark = if cb.checked { "[x]" } else { "[ ]" };
                let style = if self.take_focus() {
                    theme::selected()
                } else {
                    row_style
                };
                vec![Span::styled(mark, style), Span::raw(" ")]
            }
            Element::Button(button) => {
                let style = if self.take_focus() {
                    theme::selected()
                } else {
                    theme::remove_control()
                };
                vec![Span::raw(" "), Span::styled(button.label.clone(), style)]
            }
            Element::Label(text) | Element::Heading(text) => {
                vec![Span::styled(text.clone(), row_style)]
            }
            Element::Column(_) | Element::Row(_) | Element::TextInput(_) => {
                self.next += element.focusables().len();
                Vec::new()
            }
        }
    }

    fn text_input(&mut self, frame: &mut Frame, area: Rect, input: &TextInput) {
        let is_focused = self.take_focus();

        let (line, offset) = if input.value.is_empty() {
            let mut spans = Vec::new();
            if is_focused {
                spans.push(Span::styled("\u{2588}", theme::input_cursor()));
            }
            spans.push(Span::styled(input.placeholder.clone(), theme::dimmed()));
            (Line::from(spans), 0)
        } else if is_focused {
            // Split at the cursor and draw a block character between.
            let at = input
                .value
                .char_indices()
                .nth(self.ctx.cursor)
                .map_or(input.value.len(), |(i, _)| i);
            let (before, after) = input.value.split_at(at);
            let offset = scroll_offset(Span::raw(before).width(), area.width.saturating_sub(2));
            let line = Line::from(vec![
                Span::styled(before.to_string(), theme::normal()),
                Span::styled("\u{2588}", theme::input_cursor()),
                Span::styled(after.to_string(), theme::normal()),
            ]);
            (line, offset)
        } else {
            (Line::from(Span::styled(input.value.clone(), theme::normal())), 0)
        };

        let block = Block::default()
            .title("New task")
            .borders(Borders::ALL)
            .border_style(if is_focused {
                theme::highlighted()
            } else {
                theme::normal()
            });

        frame.render_widget(
            Paragraph::new(line).block(block).scroll((0, offset)),
            area,
        );
    }
}

/// Columns to scroll a single-line field of `inner_width` so the cursor,
/// drawn after `before_cursor` columns of text, stays visible.
fn scroll_offset(before_cursor: usize, inner_width: u16) -> u16 {
    let needed = before_cursor.saturating_add(1);
    let overflow = needed.saturating_sub(usize::from(inner_width));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}
