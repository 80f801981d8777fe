//! Password recovery session.
//!
//! Holds the ticket issued by the backend, the validation code the user
//! proved, and the new password, across the three recovery steps. The
//! session is owned by the recovery view state; leaving the flow drops it,
//! and going back to the first step resets it.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RecoveryStep {
    /// Ask for a ticket with the account identifier.
    #[strum(to_string = "recovery1")]
    RequestTicket,
    /// Prove the emailed validation code.
    #[strum(to_string = "recovery2")]
    ValidateCode,
    /// Choose the new password.
    #[strum(to_string = "recovery3")]
    NewPassword,
}

impl RecoveryStep {
    pub fn number(self) -> usize {
        match self {
            RecoveryStep::RequestTicket => 1,
            RecoveryStep::ValidateCode => 2,
            RecoveryStep::NewPassword => 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoverySession {
    ticket_id: Option<String>,
    validation_code: Option<String>,
    new_password: Option<String>,
}

impl RecoverySession {
    pub fn ticket_id(&self) -> Option<&str> {
        self.ticket_id.as_deref()
    }

    pub fn validation_code(&self) -> Option<&str> {
        self.validation_code.as_deref()
    }

    pub fn new_password(&self) -> Option<&str> {
        self.new_password.as_deref()
    }

    /// A fresh ticket replaces whatever was in flight.
    pub fn start(&mut self, ticket_id: String) {
        *self = Self {
            ticket_id: Some(ticket_id),
            ..Self::default()
        };
    }

    pub fn code_accepted(&mut self, code: String) {
        self.validation_code = Some(code);
    }

    pub fn set_new_password(&mut self, password: String) {
        self.new_password = Some(password);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The step the session has progressed to.
    pub fn step(&self) -> RecoveryStep {
        match (&self.ticket_id, &self.validation_code) {
            (None, _) => RecoveryStep::RequestTicket,
            (Some(_), None) => RecoveryStep::ValidateCode,
            (Some(_), Some(_)) => RecoveryStep::NewPassword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_walks_through_steps() {
        let mut session = RecoverySession::default();
        assert_eq!(session.step(), RecoveryStep::RequestTicket);

        session.start("t-1".into());
        assert_eq!(session.step(), RecoveryStep::ValidateCode);

        session.code_accepted("123456".into());
        assert_eq!(session.step(), RecoveryStep::NewPassword);
        assert_eq!(session.ticket_id(), Some("t-1"));
    }

    #[test]
    fn new_ticket_discards_previous_progress() {
        let mut session = RecoverySession::default();
        session.start("t-1".into());
        session.code_accepted("123456".into());
        session.set_new_password("Potato123*".into());

        session.start("t-2".into());
        assert_eq!(session.ticket_id(), Some("t-2"));
        assert_eq!(session.validation_code(), None);
        assert_eq!(session.new_password(), None);
    }

    #[test]
    fn step_tags_match_navigation_names() {
        assert_eq!(RecoveryStep::RequestTicket.to_string(), "recovery1");
        assert_eq!(RecoveryStep::NewPassword.to_string(), "recovery3");
    }
}
