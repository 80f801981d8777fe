use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ApiEndpoint;
use crate::error::ClientError;
use crate::outcome::{Failure, Operation, Outcome};
use crate::requests::{
    LoginRequest, RecoveryCloseRequest, RecoveryCreateRequest, RecoveryValidateRequest,
    RegistrationRequest, TicketClosed, TicketCreated,
};

const DEFAULT_CLOSE_MESSAGE: &str = "Your password has been changed. You can log in now.";

/// Thin wrapper around a `reqwest::Client` bound to one backend.
///
/// Cheap to clone. No timeout is configured: a hanging request is bounded
/// only by the transport defaults, and nothing is retried.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: Client,
    base: Url,
}

impl IdentityClient {
    pub fn new(endpoint: &ApiEndpoint) -> Result<Self, ClientError> {
        let base = endpoint.base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Lokale Backends laufen oft mit selbstsignierten Zertifikaten
        #[cfg(debug_assertions)]
        let http = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .build()?;
        #[cfg(not(debug_assertions))]
        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Outcome {
        self.call(Operation::Register, request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Outcome {
        self.call(Operation::Login, request).await
    }

    /// Request a recovery ticket. The success value is the ticket id.
    pub async fn create_recovery_ticket(&self, request: &RecoveryCreateRequest) -> Outcome<String> {
        let op = Operation::CreateRecoveryTicket;
        let response = match self.send(op, request).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };
        let status = response.status().as_u16();
        if let Err(failure) = op.classify(status) {
            return Outcome::failure(Some(status), failure);
        }
        match response.json::<TicketCreated>().await {
            Ok(created) => Outcome::success(status, created.ticket),
            Err(err) => {
                warn!(operation = %op, status, "recovery ticket missing from response: {err}");
                Outcome::failure(Some(status), Failure::Unexpected)
            }
        }
    }

    pub async fn validate_recovery_ticket(&self, request: &RecoveryValidateRequest) -> Outcome {
        self.call(Operation::ValidateRecoveryTicket, request).await
    }

    /// Close the ticket with a new password. The success value is the message
    /// to show the user.
    pub async fn close_recovery_ticket(&self, request: &RecoveryCloseRequest) -> Outcome<String> {
        let op = Operation::CloseRecoveryTicket;
        let response = match self.send(op, request).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };
        let status = response.status().as_u16();
        if let Err(failure) = op.classify(status) {
            return Outcome::failure(Some(status), failure);
        }
        // An empty or non-json success body still counts as success.
        let body = response.json::<TicketClosed>().await.unwrap_or_default();
        let message = body
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLOSE_MESSAGE.to_string());
        Outcome::success(status, message)
    }

    async fn call<B: Serialize>(&self, op: Operation, body: &B) -> Outcome {
        match self.send(op, body).await {
            Ok(response) => {
                let status = response.status().as_u16();
                match op.classify(status) {
                    Ok(()) => Outcome::success(status, ()),
                    Err(failure) => Outcome::failure(Some(status), failure),
                }
            }
            Err(outcome) => outcome,
        }
    }

    async fn send<B: Serialize, T>(&self, op: Operation, body: &B) -> Result<Response, Outcome<T>> {
        let url = self.base.join(op.path()).map_err(|err| {
            warn!(operation = %op, "cannot build request url: {err}");
            Outcome::unreachable()
        })?;
        debug!(operation = %op, %url, "sending identity request");

        match self.http.post(url).json(body).send().await {
            Ok(response) => {
                info!(operation = %op, status = response.status().as_u16(), "identity request finished");
                Ok(response)
            }
            Err(err) => {
                warn!(operation = %op, "identity request failed: {err}");
                Err(Outcome::unreachable())
            }
        }
    }
}
