//! One module per view. [`render`] dispatches on the active [`View`]
//! exhaustively, so a new view fails to compile until it has a page.

pub mod home;
pub mod login;
pub mod recovery;
pub mod register;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::{self, alert, form_view, APP_TITLE};
use crate::core::state::{RootState, View};
use crate::form::Form;
use crate::theme::{Role, Theme};
use crate::tui::Frame;

const PANEL_WIDTH: u16 = 64;

pub fn render(f: &mut Frame<'_>, state: &RootState, theme: &Theme) {
    let area = f.area();
    let show_cursor = state.alert.is_none() && !state.busy();
    match &state.view {
        View::Login(login) => login::render(f, area, login, theme, show_cursor),
        View::Register(register) => register::render(f, area, register, theme, show_cursor),
        View::Recovery(recovery) => recovery::render(f, area, recovery, theme, show_cursor),
        View::Home(home) => home::render(f, area, home, theme),
    }
    if state.busy() {
        let [_, status] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        f.render_widget(
            Paragraph::new(Span::styled("Sending…", theme.style(Role::Info))).right_aligned(),
            status,
        );
    }
    if let Some(a) = &state.alert {
        alert::render(f, area, a, theme);
    }
}

/// Parts of a form panel shared by every page.
pub(crate) struct Panel<'a> {
    pub subtitle: &'a str,
    /// Lines above the form (banner, step indicator).
    pub header: Vec<Line<'a>>,
    pub form: &'a Form,
    pub hints: &'a [(&'a str, &'a str)],
}

pub(crate) fn render_panel(
    f: &mut Frame<'_>,
    area: Rect,
    panel: Panel<'_>,
    theme: &Theme,
    show_cursor: bool,
) {
    let header_rows = panel.header.len() as u16;
    let form_rows = form_view::height(panel.form);
    // borders + subtitle + spacer + header + form
    let height = 2 + 2 + header_rows + form_rows;

    let [body, hint_row] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let outer = components::centered_rect(body, PANEL_WIDTH, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(theme.style(Role::Primary))
        .title(Span::styled(format!(" {APP_TITLE} "), theme.bold(Role::Primary)));
    let inner = block.inner(outer);
    f.render_widget(block, outer);

    let [subtitle, _, header, form] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(header_rows),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Span::styled(panel.subtitle, theme.bold(Role::Text))).centered(),
        subtitle,
    );
    f.render_widget(Paragraph::new(panel.header), header);
    form_view::render(f, form, panel.form, theme, show_cursor);
    components::hints(f, hint_row, theme, panel.hints);
}
