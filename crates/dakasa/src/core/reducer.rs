//! Reducer.
//!
//! `reduce` is the only place where `RootState` changes. It never performs
//! I/O: identity calls leave as `Effect::Async`, and their results come back
//! as `Action::TaskFinished`.
//!
//! Policy:
//!   * While an alert is open only dismissal, quit, resize and task results
//!     are processed.
//!   * While a request is in flight (`busy`) submissions are dropped.
//!   * Every request gets a fresh task id, kept in `RootState::in_flight`.
//!     Replacing or restarting a view forgets it, and a result whose id is
//!     not the awaited one changes nothing.

use identity::Failure;
use tracing::debug;

use crate::action::Action;
use crate::core::effects::{Effect, TaskKind, TaskResultKind};
use crate::core::executor::TaskId;
use crate::core::state::{
    Alert, HomeState, LoginState, Mode, RecoveryState, RegisterState, RootState, View,
};
use crate::domain::forms::{self, keys};
use crate::domain::recovery::RecoveryStep;
use crate::domain::wizard::Advance;

pub const REGISTERED_BANNER: &str = "Your account was created. You can log in now.";

pub fn reduce(state: &mut RootState, action: Action) -> Vec<Effect> {
    if state.alert.is_some() {
        return reduce_with_alert(state, action);
    }

    match action {
        Action::Quit => {
            state.quit_requested = true;
            Vec::new()
        }
        Action::Resize(w, h) => {
            state.last_resize = Some((w, h));
            Vec::new()
        }
        Action::Error(message) => {
            state.alert = Some(Alert::error(message));
            Vec::new()
        }
        Action::FocusNext => {
            if let Some(form) = state.view.active_form_mut() {
                form.focus_next();
            }
            Vec::new()
        }
        Action::FocusPrev => {
            if let Some(form) = state.view.active_form_mut() {
                form.focus_prev();
            }
            Vec::new()
        }
        Action::Edit(key) => {
            if let Some(form) = state.view.active_form_mut() {
                form.handle_key(key);
            }
            Vec::new()
        }
        Action::Submit => submit(state),
        Action::Back => back(state),
        Action::Navigate(mode) => navigate(state, mode),
        Action::TaskStarted(id, label) => vec![Effect::log(format!("[task:{id}] {label}"))],
        Action::TaskFinished(id, result) => finish(state, id, result),
        _ => Vec::new(),
    }
}

fn reduce_with_alert(state: &mut RootState, action: Action) -> Vec<Effect> {
    match action {
        Action::DismissAlert | Action::Submit | Action::Back => {
            state.alert = None;
            Vec::new()
        }
        Action::Quit => {
            state.quit_requested = true;
            Vec::new()
        }
        Action::Resize(w, h) => {
            state.last_resize = Some((w, h));
            Vec::new()
        }
        Action::TaskFinished(id, result) => finish(state, id, result),
        _ => Vec::new(),
    }
}

fn dispatch(state: &mut RootState, kind: TaskKind) -> Vec<Effect> {
    let id = state.begin_task();
    vec![Effect::async_task(id, kind)]
}

/// Forget the awaited request after the view was replaced or restarted.
fn abandon(state: &mut RootState, effects: &mut Vec<Effect>) {
    if let Some(id) = state.abandon_task() {
        effects.push(Effect::log(format!("[task:{id}] abandoned")));
    }
}

fn submit(state: &mut RootState) -> Vec<Effect> {
    if state.busy() {
        debug!("submission ignored, request in flight");
        return Vec::new();
    }

    let kind = match &mut state.view {
        View::Login(login) => {
            if !login.form.validate_all() {
                return Vec::new();
            }
            login.info = None;
            TaskKind::Login(forms::login_request(&login.form))
        }
        View::Register(register) => match register.wizard.next() {
            Advance::Blocked => return Vec::new(),
            Advance::Moved(step) => {
                return vec![Effect::log(format!("registration step {}", step + 1))];
            }
            Advance::Submit => match forms::registration_request(&register.wizard) {
                Some(request) => TaskKind::Register(request),
                None => return Vec::new(),
            },
        },
        View::Recovery(recovery) => {
            if !recovery.form_mut().validate_all() {
                return Vec::new();
            }
            match recovery.step {
                RecoveryStep::RequestTicket => {
                    TaskKind::CreateRecoveryTicket(forms::recovery_create_request(&recovery.request))
                }
                step => {
                    let Some(ticket) = recovery.session.ticket_id().map(str::to_string) else {
                        recovery.restart();
                        return vec![Effect::log("recovery ticket missing, restarting flow")];
                    };
                    if step == RecoveryStep::ValidateCode {
                        TaskKind::ValidateRecoveryTicket(forms::recovery_validate_request(
                            &ticket,
                            &recovery.code,
                        ))
                    } else {
                        let password = recovery.password.value(keys::PASSWORD).to_string();
                        recovery.session.set_new_password(password.clone());
                        TaskKind::CloseRecoveryTicket(forms::recovery_close_request(
                            &ticket, &password,
                        ))
                    }
                }
            }
        }
        View::Home(_) => return Vec::new(),
    };

    dispatch(state, kind)
}

fn back(state: &mut RootState) -> Vec<Effect> {
    let mut effects = match &mut state.view {
        View::Login(login) => {
            login.form.clear(&[keys::IDENTIFIER, keys::PASSWORD]);
            return Vec::new();
        }
        View::Register(register) => {
            if register.wizard.back() {
                return Vec::new();
            }
            state.view = View::Login(LoginState::new());
            vec![Effect::log("navigate: login")]
        }
        View::Recovery(recovery) => {
            if recovery.step == RecoveryStep::RequestTicket {
                state.view = View::Login(LoginState::new());
                vec![Effect::log("navigate: login")]
            } else {
                recovery.restart();
                vec![Effect::log("navigate: recovery1")]
            }
        }
        View::Home(_) => return Vec::new(),
    };
    abandon(state, &mut effects);
    effects
}

fn navigate(state: &mut RootState, mode: Mode) -> Vec<Effect> {
    let current = state.mode();
    match mode {
        // Home is only reachable through a successful login.
        Mode::Home => return Vec::new(),
        Mode::Login | Mode::Register if mode == current => return Vec::new(),
        Mode::Login => state.view = View::Login(LoginState::new()),
        Mode::Register => state.view = View::Register(RegisterState::new()),
        Mode::Recovery(step) => match &mut state.view {
            View::Recovery(recovery) => {
                if step == RecoveryStep::RequestTicket {
                    recovery.restart();
                } else if step.number() <= recovery.session.step().number() {
                    recovery.step = step;
                } else {
                    debug!(%step, "recovery step not reached yet");
                    return Vec::new();
                }
            }
            // Entering the flow from outside always starts with a fresh session.
            _ => state.view = View::Recovery(RecoveryState::new()),
        },
    }
    let mut effects = vec![Effect::log(format!("navigate: {current} -> {}", state.mode()))];
    abandon(state, &mut effects);
    effects
}

fn finish(state: &mut RootState, id: TaskId, result: TaskResultKind) -> Vec<Effect> {
    if state.in_flight != Some(id) {
        return vec![Effect::log(format!("[task:{id}] result ignored, not awaited"))];
    }
    state.in_flight = None;
    let mut effects = vec![Effect::log(format!("[task:{id}] finished"))];

    match result {
        TaskResultKind::Registered(outcome) => {
            if !matches!(state.view, View::Register(_)) {
                return stale(effects);
            }
            match outcome.result {
                Ok(()) => {
                    state.view = View::Login(LoginState::with_info(REGISTERED_BANNER));
                    effects.push(Effect::log("registration succeeded"));
                }
                Err(failure) => fail(state, failure),
            }
        }
        TaskResultKind::LoggedIn {
            identifier,
            outcome,
        } => {
            let View::Login(login) = &mut state.view else {
                return stale(effects);
            };
            match outcome.result {
                Ok(()) => {
                    effects.push(Effect::log(format!("logged in as {identifier}")));
                    state.view = View::Home(HomeState { identifier });
                }
                Err(failure) => {
                    login.form.clear(&[keys::PASSWORD]);
                    fail(state, failure);
                }
            }
        }
        TaskResultKind::TicketCreated(outcome) => {
            let View::Recovery(recovery) = &mut state.view else {
                return stale(effects);
            };
            if recovery.step != RecoveryStep::RequestTicket {
                return stale(effects);
            }
            match outcome.result {
                Ok(ticket) => {
                    recovery.session.start(ticket);
                    recovery.code = forms::recovery_code_form();
                    recovery.step = RecoveryStep::ValidateCode;
                }
                Err(failure) => fail(state, failure),
            }
        }
        TaskResultKind::TicketValidated { code, outcome } => {
            let View::Recovery(recovery) = &mut state.view else {
                return stale(effects);
            };
            if recovery.step != RecoveryStep::ValidateCode {
                return stale(effects);
            }
            match outcome.result {
                Ok(()) => {
                    recovery.session.code_accepted(code);
                    recovery.step = RecoveryStep::NewPassword;
                }
                Err(failure) => {
                    recovery.code.clear(&[keys::CODE]);
                    fail(state, failure);
                }
            }
        }
        TaskResultKind::TicketClosed(outcome) => {
            let View::Recovery(recovery) = &state.view else {
                return stale(effects);
            };
            if recovery.step != RecoveryStep::NewPassword {
                return stale(effects);
            }
            match outcome.result {
                Ok(message) => {
                    state.view = View::Login(LoginState::new());
                    state.alert = Some(Alert::info("Password changed", message));
                }
                Err(failure) => fail(state, failure),
            }
        }
    }
    effects
}

fn fail(state: &mut RootState, failure: Failure) {
    state.alert = Some(Alert::error(failure.to_string()));
}

fn stale(mut effects: Vec<Effect>) -> Vec<Effect> {
    effects.push(Effect::log("result ignored, view changed"));
    effects
}
