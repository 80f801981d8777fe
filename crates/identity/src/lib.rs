//! Client for the DaKasa identity API.
//!
//! The crate wraps the five account endpoints used by the application:
//!
//! | operation                  | endpoint                      |
//! |----------------------------|-------------------------------|
//! | [`IdentityClient::register`]                 | `POST /api/register`          |
//! | [`IdentityClient::login`]                    | `POST /api/login`             |
//! | [`IdentityClient::create_recovery_ticket`]   | `POST /api/recovery/create`   |
//! | [`IdentityClient::validate_recovery_ticket`] | `POST /api/recovery/validate` |
//! | [`IdentityClient::close_recovery_ticket`]    | `POST /api/recovery/chall`    |
//!
//! Every call is a single best-effort request. The HTTP status is mapped to an
//! [`Outcome`] whose failure side is one of the user-facing [`Failure`]
//! categories; transport errors collapse into [`Failure::Unexpected`].
//!
//! ```ignore
//! let client = IdentityClient::new(&ApiEndpoint::new("http", "localhost", 3000))?;
//! let outcome = client.login(&LoginRequest::new("potato", "Potato123*")).await;
//! if let Err(failure) = outcome.result {
//!     eprintln!("{failure}");
//! }
//! ```

mod client;
mod config;
mod error;
mod outcome;
mod requests;

pub use client::IdentityClient;
pub use config::ApiEndpoint;
pub use error::ClientError;
pub use outcome::{Failure, Operation, Outcome};
pub use requests::{
    LoginRequest, RecoveryCloseRequest, RecoveryCreateRequest, RecoveryValidateRequest,
    RegistrationRequest,
};
