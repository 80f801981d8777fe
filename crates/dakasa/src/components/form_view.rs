//! Renders a [`Form`]: label, value line and status line per field.
//!
//! Secret values are masked. The status line shows the field's inline error
//! once it was validated, otherwise its help text.

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::form::{FieldStatus, Form};
use crate::theme::{Role, Theme};
use crate::tui::Frame;

pub const MASK: char = '•';
const PROMPT: &str = "› ";

/// Rows used by one field.
pub const FIELD_HEIGHT: u16 = 3;

pub fn height(form: &Form) -> u16 {
    let description = u16::from(form.schema().description.is_some()) * 2;
    description + form.schema().field_count() as u16 * FIELD_HEIGHT
}

/// The lines of the form and the cursor position (row, column) relative to
/// the top-left corner.
pub fn lines<'a>(form: &'a Form, theme: &Theme) -> (Vec<Line<'a>>, (u16, u16)) {
    let mut lines = Vec::new();
    if let Some(description) = &form.schema().description {
        lines.push(Line::styled(description.as_str(), theme.style(Role::SubtleText)));
        lines.push(Line::default());
    }

    let mut cursor = (0, 0);
    for (index, field) in form.schema().fields.iter().enumerate() {
        let focused = index == form.focused_index();
        let value = form.value(&field.key);
        let shown = if field.is_secret() {
            MASK.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let mut label = vec![Span::styled(
            field.label.as_str(),
            if focused {
                theme.focused()
            } else {
                theme.style(Role::Text)
            },
        )];
        if !field.required {
            label.push(Span::styled(" (optional)", theme.style(Role::Muted)));
        }
        lines.push(Line::from(label));

        if focused {
            cursor = (
                lines.len() as u16,
                (PROMPT.chars().count() + form.cursor()) as u16,
            );
        }
        lines.push(Line::from(vec![
            Span::styled(PROMPT, theme.style(if focused { Role::Accent } else { Role::Muted })),
            Span::styled(shown, theme.style(Role::Text)),
        ]));

        let status = match form.state().status(&field.key) {
            FieldStatus::Invalid(message) => {
                Line::styled(message.as_str(), theme.style(Role::Danger))
            }
            _ => match &field.help {
                Some(help) => Line::styled(help.as_str(), theme.style(Role::Muted)),
                None => Line::default(),
            },
        };
        lines.push(status);
    }
    (lines, cursor)
}

pub fn render(f: &mut Frame<'_>, area: Rect, form: &Form, theme: &Theme, show_cursor: bool) {
    let (lines, (row, col)) = lines(form, theme);
    f.render_widget(Paragraph::new(lines), area);
    if show_cursor && row < area.height {
        f.set_cursor_position(Position::new(
            area.x + col.min(area.width.saturating_sub(1)),
            area.y + row,
        ));
    }
}
