//! Reusable widgets shared by the pages.

pub mod alert;
pub mod form_view;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{Role, Theme};
use crate::tui::Frame;

pub const APP_TITLE: &str = "DaKasa";

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// One "key: label" pair per entry, rendered on a single line.
pub fn hints(f: &mut Frame<'_>, area: Rect, theme: &Theme, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 3);
    for (i, (key, label)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.style(Role::Muted)));
        }
        spans.push(Span::styled(*key, theme.bold(Role::Accent)));
        spans.push(Span::styled(format!(" {label}"), theme.style(Role::SubtleText)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}
