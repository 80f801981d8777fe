use ratatui::{layout::Rect, text::Line};

use super::{render_panel, Panel};
use crate::core::state::RecoveryState;
use crate::domain::recovery::RecoveryStep;
use crate::theme::{Role, Theme};
use crate::tui::Frame;

pub fn render(
    f: &mut Frame<'_>,
    area: Rect,
    state: &RecoveryState,
    theme: &Theme,
    show_cursor: bool,
) {
    let hints: &[(&str, &str)] = match state.step {
        RecoveryStep::RequestTicket => &[("Enter", "send"), ("Esc", "back to login")],
        // Esc restarts the flow just like ^E.
        RecoveryStep::ValidateCode => &[("Enter", "send"), ("^E/Esc", "insert another email")],
        RecoveryStep::NewPassword => &[
            ("Enter", "change password"),
            ("Tab", "next field"),
            ("^E", "use another email"),
        ],
    };
    let form = state.form();

    let mut header = vec![Line::styled(
        format!("Step {} of 3", state.step.number()),
        theme.style(Role::SubtleText),
    )
    .centered()];
    header.push(Line::default());

    render_panel(
        f,
        area,
        Panel {
            subtitle: &form.schema().title,
            header,
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
    use crate::pages::tests::{contains, screen};

    #[test]
    fn each_step_shows_its_form() {
        let mut recovery = RecoveryState::new();
        let rows = screen(&RootState::new(View::Recovery(RecoveryState::new())));
        assert!(contains(&rows, "Let's recover this account"));

        recovery.step = RecoveryStep::ValidateCode;
        let rows = screen(&RootState::new(View::Recovery(recovery)));
        assert!(contains(&rows, "Validation code"));
        assert!(contains(&rows, "^E/Esc insert another email"));
        assert!(!contains(&rows, "Esc back"));
    }

    #[test]
    fn step_one_offers_the_way_back_to_login() {
        let rows = screen(&RootState::new(View::Recovery(RecoveryState::new())));
        assert!(contains(&rows, "Esc back to login"));
    }
}
