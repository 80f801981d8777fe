use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::{self, APP_TITLE};
use crate::core::state::HomeState;
use crate::theme::{Role, Theme};
use crate::tui::Frame;

pub fn render(f: &mut Frame<'_>, area: Rect, state: &HomeState, theme: &Theme) {
    let [body, hint_row] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let panel = components::centered_rect(body, 48, 5);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(theme.style(Role::Primary))
        .title(Span::styled(format!(" {APP_TITLE} "), theme.bold(Role::Primary)));
    let text = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Welcome, ", theme.style(Role::Text)),
            Span::styled(state.identifier.as_str(), theme.bold(Role::Accent)),
        ])
        .centered(),
    ];
    f.render_widget(Paragraph::new(text).block(block), panel);
    components::hints(f, hint_row, theme, &[("^L", "log out"), ("^C", "quit")]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{RootState, View};
    use crate::pages::tests::{contains, screen};

    #[test]
    fn greets_the_logged_in_user() {
        let state = RootState::new(View::Home(HomeState {
            identifier: "potato".into(),
        }));
        let rows = screen(&state);
        assert!(contains(&rows, "Welcome, potato"));
        assert!(contains(&rows, "log out"));
    }
}
