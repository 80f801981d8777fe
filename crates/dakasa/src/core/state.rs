//! Application state.
//!
//! `View` is the tagged union of the top-level panels; exactly one is active.
//! Every panel owns its own form state, and the recovery panel owns the
//! [`RecoverySession`] for as long as the user stays in the flow.
//! `RootState` wraps the active view together with the cross-cutting bits
//! (modal alert, in-flight request flag, quit request).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::executor::TaskId;
use crate::domain::forms;
use crate::domain::recovery::{RecoverySession, RecoveryStep};
use crate::domain::wizard::FormWizard;
use crate::form::Form;

/// Navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Login,
    Register,
    Recovery(RecoveryStep),
    Home,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Login => f.write_str("login"),
            Mode::Register => f.write_str("register"),
            Mode::Recovery(step) => write!(f, "{step}"),
            Mode::Home => f.write_str("home"),
        }
    }
}

impl Mode {
    /// Parse the navigation tags used by the screens. The empty tag is login.
    pub fn from_tag(tag: &str) -> Option<Mode> {
        match tag {
            "" | "login" => Some(Mode::Login),
            "register" => Some(Mode::Register),
            "recovery1" => Some(Mode::Recovery(RecoveryStep::RequestTicket)),
            "recovery2" => Some(Mode::Recovery(RecoveryStep::ValidateCode)),
            "recovery3" => Some(Mode::Recovery(RecoveryStep::NewPassword)),
            "home" => Some(Mode::Home),
            _ => None,
        }
    }
}

pub struct LoginState {
    pub form: Form,
    /// Banner shown above the form (e.g. after registering).
    pub info: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: forms::login_form(),
            info: None,
        }
    }

    pub fn with_info(info: impl Into<String>) -> Self {
        Self {
            info: Some(info.into()),
            ..Self::new()
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RegisterState {
    pub wizard: FormWizard,
}

impl RegisterState {
    pub fn new() -> Self {
        Self {
            wizard: forms::registration_wizard(forms::today()),
        }
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecoveryState {
    pub step: RecoveryStep,
    pub session: RecoverySession,
    pub request: Form,
    pub code: Form,
    pub password: Form,
}

impl RecoveryState {
    pub fn new() -> Self {
        Self {
            step: RecoveryStep::RequestTicket,
            session: RecoverySession::default(),
            request: forms::recovery_request_form(),
            code: forms::recovery_code_form(),
            password: forms::recovery_password_form(),
        }
    }

    pub fn form(&self) -> &Form {
        match self.step {
            RecoveryStep::RequestTicket => &self.request,
            RecoveryStep::ValidateCode => &self.code,
            RecoveryStep::NewPassword => &self.password,
        }
    }

    pub fn form_mut(&mut self) -> &mut Form {
        match self.step {
            RecoveryStep::RequestTicket => &mut self.request,
            RecoveryStep::ValidateCode => &mut self.code,
            RecoveryStep::NewPassword => &mut self.password,
        }
    }

    /// Back to step 1: the in-flight ticket is discarded, the identifier kept.
    pub fn restart(&mut self) {
        self.session.reset();
        self.code = forms::recovery_code_form();
        self.password = forms::recovery_password_form();
        self.step = RecoveryStep::RequestTicket;
    }
}

impl Default for RecoveryState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub identifier: String,
}

pub enum View {
    Login(LoginState),
    Register(RegisterState),
    Recovery(RecoveryState),
    Home(HomeState),
}

impl View {
    pub fn mode(&self) -> Mode {
        match self {
            View::Login(_) => Mode::Login,
            View::Register(_) => Mode::Register,
            View::Recovery(r) => Mode::Recovery(r.step),
            View::Home(_) => Mode::Home,
        }
    }

    /// The form receiving input, if the view has one.
    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self {
            View::Login(s) => Some(&mut s.form),
            View::Register(s) => Some(s.wizard.current_form_mut()),
            View::Recovery(s) => Some(s.form_mut()),
            View::Home(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Oops".into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct RootState {
    pub view: View,
    pub alert: Option<Alert>,
    /// The request whose result the active view waits for. Results carrying
    /// any other id are dropped.
    pub in_flight: Option<TaskId>,
    next_task: TaskId,
    pub quit_requested: bool,
    pub last_resize: Option<(u16, u16)>,
}

impl RootState {
    pub fn new(view: View) -> Self {
        Self {
            view,
            alert: None,
            in_flight: None,
            next_task: 1,
            quit_requested: false,
            last_resize: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.view.mode()
    }

    /// A request is in flight; further submissions are ignored.
    pub fn busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Allocate the id for a new request and mark it as awaited.
    pub fn begin_task(&mut self) -> TaskId {
        let id = self.next_task;
        self.next_task += 1;
        self.in_flight = Some(id);
        id
    }

    /// Stop waiting for the current request, if any.
    pub fn abandon_task(&mut self) -> Option<TaskId> {
        self.in_flight.take()
    }
}

impl Default for RootState {
    fn default() -> Self {
        Self::new(View::Login(LoginState::new()))
    }
}
