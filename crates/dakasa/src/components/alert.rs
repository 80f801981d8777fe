use ratatui::{
    layout::Rect,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;
use crate::core::state::{Alert, AlertKind};
use crate::theme::{Role, Theme};
use crate::tui::Frame;

const MIN_WIDTH: u16 = 48;

/// Modal dialog over `area`. Enter / Esc dismiss it (see the app keymap).
pub fn render(f: &mut Frame<'_>, area: Rect, alert: &Alert, theme: &Theme) {
    if area.width < 5 || area.height < 5 {
        return;
    }
    let role = match alert.kind {
        AlertKind::Error => Role::Danger,
        AlertKind::Info => Role::Info,
    };

    let width = MIN_WIDTH.max(alert.message.chars().count() as u16 / 2 + 4);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let message_rows: u16 = alert
        .message
        .lines()
        .map(|l| (l.chars().count() / text_width + 1) as u16)
        .sum();
    let dialog = centered_rect(area, width, message_rows + 4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(theme.style(role))
        .title(Span::styled(format!(" {} ", alert.title), theme.bold(role)));

    let mut lines: Vec<Line> = alert
        .message
        .lines()
        .map(|l| Line::styled(l, theme.style(Role::Text)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled("Enter / Esc: OK", theme.style(Role::Muted)).right_aligned());

    f.render_widget(Clear, dialog);
    f.render_widget(
        Paragraph::new(lines)
            .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
            .wrap(Wrap { trim: true }),
        dialog,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn alert_shows_title_and_message() {
        let theme = Theme::default();
        let alert = Alert::error("Wrong username or password.");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &alert, &theme))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Oops"));
        assert!(screen.contains("Wrong username or password."));
    }
}
