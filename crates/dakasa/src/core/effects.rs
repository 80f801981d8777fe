/*!
Effect & task model.

The reducer stays pure: it only returns `Vec<Effect>`. The event loop logs
`Effect::Log` and hands `Effect::Async(TaskId, TaskKind)` to the
[`TaskExecutor`](super::executor::TaskExecutor), which performs the identity
call and re-enters the loop with `Action::TaskFinished(id, TaskResultKind)`.
The id is allocated by the reducer, so it can tell the result it waits for
from one that belongs to a view the user already left.
*/

use std::fmt;

use identity::{
    LoginRequest, Outcome, RecoveryCloseRequest, RecoveryCreateRequest, RecoveryValidateRequest,
    RegistrationRequest,
};
use serde::{Deserialize, Serialize};

use crate::core::executor::TaskId;

/// Declarative instruction emitted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule an identity call under the given id.
    Async(TaskId, TaskKind),
    /// Lightweight side-effect: log a message (info level).
    Log(String),
}

impl Effect {
    pub fn log<T: Into<String>>(msg: T) -> Self {
        Effect::Log(msg.into())
    }

    pub fn async_task(id: TaskId, kind: TaskKind) -> Self {
        Effect::Async(id, kind)
    }
}

/// One identity call, carrying everything needed to execute it.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Register(RegistrationRequest),
    Login(LoginRequest),
    CreateRecoveryTicket(RecoveryCreateRequest),
    ValidateRecoveryTicket(RecoveryValidateRequest),
    CloseRecoveryTicket(RecoveryCloseRequest),
}

// Only non-secret fields end up in labels and logs.
impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Register(r) => write!(f, "Register(username={})", r.username),
            TaskKind::Login(r) => write!(f, "Login(identifier={})", r.identifier),
            TaskKind::CreateRecoveryTicket(r) => {
                write!(f, "CreateRecoveryTicket(identifier={})", r.identifier)
            }
            TaskKind::ValidateRecoveryTicket(r) => {
                write!(f, "ValidateRecoveryTicket(ticket={})", r.ticket)
            }
            TaskKind::CloseRecoveryTicket(r) => {
                write!(f, "CloseRecoveryTicket(ticket={})", r.ticket)
            }
        }
    }
}

/// Results produced by the executor, one per `TaskKind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskResultKind {
    Registered(Outcome),
    LoggedIn { identifier: String, outcome: Outcome },
    /// Success carries the ticket id.
    TicketCreated(Outcome<String>),
    /// `code` is the code that was submitted.
    TicketValidated { code: String, outcome: Outcome },
    /// Success carries the message to show.
    TicketClosed(Outcome<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_labels_never_contain_passwords() {
        let kind = TaskKind::Login(LoginRequest::new("potato", "Potato123*"));
        let label = kind.to_string();
        assert_eq!(label, "Login(identifier=potato)");

        let kind = TaskKind::CloseRecoveryTicket(RecoveryCloseRequest {
            ticket: "t-1".into(),
            password: "Potato123*".into(),
        });
        assert!(!kind.to_string().contains("Potato123*"));
    }

    #[test]
    fn results_serialize_without_secrets() {
        let result = TaskResultKind::LoggedIn {
            identifier: "potato".into(),
            outcome: Outcome::success(200, ()),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("potato"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn construct_log_effect() {
        match Effect::log("hello") {
            Effect::Log(s) => assert_eq!(s, "hello"),
            other => panic!("expected Log variant, got {other:?}"),
        }
    }
}
