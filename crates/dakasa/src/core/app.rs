use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use identity::IdentityClient;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    action::Action,
    config::Config,
    core::{
        effects::Effect,
        executor::TaskExecutor,
        reducer::reduce,
        state::{Mode, RootState, View},
    },
    domain::recovery::RecoveryStep,
    pages,
    theme::Theme,
    tui::{Event, Tui},
};

pub struct App {
    pub config: Config,
    pub state: RootState,
    pub theme: Theme,
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            state: RootState::default(),
            theme: Theme::default(),
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let client = IdentityClient::new(&self.config.api)?;
        info!(base = %client.base_url(), "identity backend");
        let executor = TaskExecutor::new_with_action_tx(client, action_tx.clone());

        let mut tui = self.new_tui()?;
        tui.enter()?;

        loop {
            if let Some(event) = tui.next_event().await {
                for action in map_event(&self.state, event) {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                // Display only: Debug would print the typed characters.
                if !matches!(action, Action::Tick | Action::Render) {
                    debug!("{action}");
                }
                match &action {
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::ClearScreen => tui.terminal.clear()?,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui)?;
                    }
                    Action::Render => self.render(&mut tui)?,
                    _ => {}
                }
                for effect in reduce(&mut self.state, action) {
                    run_effect(&executor, effect);
                }
                if self.state.quit_requested {
                    self.should_quit = true;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui = self.new_tui()?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn new_tui(&self) -> Result<Tui> {
        Ok(Tui::new()?
            .tick_rate(self.config.ui.tick_rate)
            .frame_rate(self.config.ui.frame_rate))
    }

    fn render(&self, tui: &mut Tui) -> Result<()> {
        tui.draw(|f| pages::render(f, &self.state, &self.theme))?;
        Ok(())
    }
}

fn run_effect(executor: &TaskExecutor, effect: Effect) {
    match effect {
        Effect::Async(id, kind) => {
            debug!("[task:{id}] scheduled {kind}");
            executor.spawn(id, kind);
        }
        Effect::Log(message) => info!("{message}"),
    }
}

/// Translate a terminal event into actions for the current state.
pub fn map_event(state: &RootState, event: Event) -> Vec<Action> {
    match event {
        Event::Tick => vec![Action::Tick],
        Event::Render => vec![Action::Render],
        Event::Resize(w, h) => vec![Action::Resize(w, h)],
        Event::Key(key) => map_key(state, key).into_iter().collect(),
        Event::Paste(text) if state.alert.is_none() => text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| {
                Action::Edit(KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    kind: KeyEventKind::Press,
                    state: KeyEventState::NONE,
                })
            })
            .collect(),
        Event::Error => vec![Action::Error("Reading terminal input failed".into())],
        _ => Vec::new(),
    }
}

pub fn map_key(state: &RootState, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    if state.alert.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::DismissAlert),
            _ => None,
        };
    }

    if ctrl {
        return match (key.code, &state.view) {
            (KeyCode::Char('z'), _) => Some(Action::Suspend),
            (KeyCode::Char('n'), View::Login(_)) => Some(Action::Navigate(Mode::Register)),
            (KeyCode::Char('f'), View::Login(_)) => Some(Action::Navigate(Mode::Recovery(
                RecoveryStep::RequestTicket,
            ))),
            (KeyCode::Char('e'), View::Recovery(r)) if r.step != RecoveryStep::RequestTicket => {
                Some(Action::Navigate(Mode::Recovery(RecoveryStep::RequestTicket)))
            }
            (KeyCode::Char('l'), View::Home(_)) => Some(Action::Navigate(Mode::Login)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Back),
        _ if matches!(state.view, View::Home(_)) => None,
        _ => Some(Action::Edit(key)),
    }
}
