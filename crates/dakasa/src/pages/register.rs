use ratatui::{layout::Rect, text::Line};

use super::{render_panel, Panel};
use crate::core::state::RegisterState;
use crate::theme::{Role, Theme};
use crate::tui::Frame;

pub fn step_label(current: usize, total: usize) -> String {
    format!("Step {} of {}", current + 1, total)
}

pub fn render(
    f: &mut Frame<'_>,
    area: Rect,
    state: &RegisterState,
    theme: &Theme,
    show_cursor: bool,
) {
    let position = state.wizard.position();
    let hints: &[(&str, &str)] = match (position.is_first(), position.is_last()) {
        (true, _) => &[("Enter", "next"), ("Tab", "next field"), ("Esc", "back to login")],
        (false, false) => &[("Enter", "next"), ("Tab", "next field"), ("Esc", "back")],
        (false, true) => &[("Enter", "create account"), ("Tab", "next field"), ("Esc", "back")],
    };
    let form = state.wizard.current_form();

    render_panel(
        f,
        area,
        Panel {
            subtitle: &form.schema().title,
            header: vec![
                Line::styled(
                    step_label(position.current(), position.total()),
                    theme.style(Role::SubtleText),
                )
                .centered(),
                Line::default(),
            ],
            form,
            hints,
        },
        theme,
        show_cursor,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{RootState, View};
    use crate::domain::forms::tests::filled_wizard;
    use crate::pages::tests::{contains, screen};

    #[test]
    fn step_indicator_follows_wizard() {
        let mut register = RegisterState {
            wizard: filled_wizard(),
        };
        register.wizard.next();
        let rows = screen(&RootState::new(View::Register(register)));
        assert!(contains(&rows, "Step 2 of 3"));
        assert!(contains(&rows, "Contact & password"));
    }

    #[test]
    fn first_step_links_back_to_login() {
        let rows = screen(&RootState::new(View::Register(RegisterState::new())));
        assert!(contains(&rows, "Step 1 of 3"));
        assert!(contains(&rows, "back to login"));
    }
}
