use ratatui::{layout::Rect, text::Line};

use super::{render_panel, Panel};
use crate::core::state::LoginState;
use crate::theme::{Role, Theme};
use crate::tui::Frame;

const HINTS: &[(&str, &str)] = &[
    ("Enter", "log in"),
    ("Tab", "next"),
    ("^N", "create account"),
    ("^F", "forgot credentials?"),
    ("^C", "quit"),
];

pub fn render(f: &mut Frame<'_>, area: Rect, state: &LoginState, theme: &Theme, show_cursor: bool) {
    let header = state
        .info
        .as_deref()
        .map(|info| vec![Line::styled(info, theme.style(Role::Success)), Line::default()])
        .unwrap_or_default();
    render_panel(
        f,
        area,
        Panel {
            subtitle: &state.form.schema().title,
            header,
            form: &state.form,
            hints: HINTS,
        },
        theme,
        show_cursor,
    );
}
