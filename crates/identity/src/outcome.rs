use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five identity operations. Each knows its endpoint and which status
/// codes carry a specific meaning for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Register,
    Login,
    CreateRecoveryTicket,
    ValidateRecoveryTicket,
    CloseRecoveryTicket,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Register,
        Operation::Login,
        Operation::CreateRecoveryTicket,
        Operation::ValidateRecoveryTicket,
        Operation::CloseRecoveryTicket,
    ];

    /// Path relative to the api base url.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Register => "/api/register",
            Operation::Login => "/api/login",
            Operation::CreateRecoveryTicket => "/api/recovery/create",
            Operation::ValidateRecoveryTicket => "/api/recovery/validate",
            Operation::CloseRecoveryTicket => "/api/recovery/chall",
        }
    }

    /// Map a response status to success or a user-facing failure category.
    ///
    /// Status meanings are scoped: a 403 is "bad credentials" only for
    /// login, a 409 is "duplicate user" only for register, a 410 is "code
    /// expired" only for recovery validation. Closing a ticket has no
    /// specific failures at all.
    pub fn classify(self, status: u16) -> Result<(), Failure> {
        match (self, status) {
            (_, 200..=299) => Ok(()),
            (Operation::CloseRecoveryTicket, _) => Err(Failure::Unexpected),
            (_, 400) => Err(Failure::FieldsInvalid),
            (Operation::Login, 403) => Err(Failure::BadCredentials),
            (Operation::Register, 409) => Err(Failure::DuplicateUser),
            (Operation::ValidateRecoveryTicket, 410) => Err(Failure::CodeExpired),
            _ => Err(Failure::Unexpected),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::CreateRecoveryTicket => "recovery.create",
            Operation::ValidateRecoveryTicket => "recovery.validate",
            Operation::CloseRecoveryTicket => "recovery.close",
        };
        f.write_str(label)
    }
}

/// User-facing failure categories. `Display` is the alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Failure {
    #[error("Some fields are invalid. Review them and try again.")]
    FieldsInvalid,
    #[error("Wrong username or password.")]
    BadCredentials,
    #[error("A user with this username or email already exists.")]
    DuplicateUser,
    #[error("This validation code has expired. Request a new one.")]
    CodeExpired,
    #[error("Something went wrong on our side. Please try again later.")]
    Unexpected,
}

/// Result of one identity call.
///
/// `status` is `None` when no HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T = ()> {
    pub status: Option<u16>,
    pub result: Result<T, Failure>,
}

impl<T> Outcome<T> {
    pub fn success(status: u16, value: T) -> Self {
        Self {
            status: Some(status),
            result: Ok(value),
        }
    }

    pub fn failure(status: Option<u16>, failure: Failure) -> Self {
        Self {
            status,
            result: Err(failure),
        }
    }

    /// The request never reached the server (or its answer was unreadable).
    pub fn unreachable() -> Self {
        Self::failure(None, Failure::Unexpected)
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Empty on success, the failure text otherwise.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(_) => String::new(),
            Err(failure) => failure.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_empty_message() {
        for op in Operation::ALL {
            for status in [200, 201, 204, 299] {
                assert_eq!(op.classify(status), Ok(()), "{op} {status}");
            }
        }
        let outcome = Outcome::success(201, ());
        assert!(outcome.message().is_empty());
    }

    #[test]
    fn register_conflict_is_duplicate_user() {
        assert_eq!(
            Operation::Register.classify(409),
            Err(Failure::DuplicateUser)
        );
        // only register gives 409 a meaning
        assert_eq!(Operation::Login.classify(409), Err(Failure::Unexpected));
    }

    #[test]
    fn login_forbidden_is_bad_credentials() {
        assert_eq!(Operation::Login.classify(403), Err(Failure::BadCredentials));
        assert_eq!(Operation::Register.classify(403), Err(Failure::Unexpected));
    }

    #[test]
    fn gone_is_expired_only_for_validation() {
        assert_eq!(
            Operation::ValidateRecoveryTicket.classify(410),
            Err(Failure::CodeExpired)
        );
        assert_eq!(
            Operation::CreateRecoveryTicket.classify(410),
            Err(Failure::Unexpected)
        );
    }

    #[test]
    fn bad_request_is_fields_invalid_except_close() {
        for op in [
            Operation::Register,
            Operation::Login,
            Operation::CreateRecoveryTicket,
            Operation::ValidateRecoveryTicket,
        ] {
            assert_eq!(op.classify(400), Err(Failure::FieldsInvalid), "{op}");
        }
        assert_eq!(
            Operation::CloseRecoveryTicket.classify(400),
            Err(Failure::Unexpected)
        );
    }

    #[test]
    fn unknown_status_is_generic_everywhere() {
        for op in Operation::ALL {
            for status in [302, 404, 418, 429, 500, 503] {
                assert_eq!(op.classify(status), Err(Failure::Unexpected), "{op} {status}");
            }
        }
    }

    #[test]
    fn unreachable_has_no_status_and_generic_message() {
        let outcome: Outcome = Outcome::unreachable();
        assert_eq!(outcome.status, None);
        assert_eq!(outcome.message(), Failure::Unexpected.to_string());
    }
}
