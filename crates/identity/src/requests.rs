use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`.
///
/// Built fresh from the registration form on each submission; the optional
/// fields are omitted from the payload when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub birthday: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Body of `POST /api/login`. `identifier` is a username or an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /api/recovery/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryCreateRequest {
    pub identifier: String,
}

/// Body of `POST /api/recovery/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryValidateRequest {
    pub ticket: String,
    pub code: String,
}

/// Body of `POST /api/recovery/chall`: closes the ticket with the new password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryCloseRequest {
    pub ticket: String,
    pub password: String,
}

/// Success body of `POST /api/recovery/create`.
#[derive(Debug, Deserialize)]
pub(crate) struct TicketCreated {
    #[serde(alias = "ticketId", alias = "id")]
    pub ticket: String,
}

/// Optional success body of `POST /api/recovery/chall`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TicketClosed {
    #[serde(default)]
    pub message: Option<String>,
}
