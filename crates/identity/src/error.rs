use thiserror::Error;

/// Errors raised while constructing an [`IdentityClient`](crate::IdentityClient).
///
/// Request-time problems never surface as `ClientError`; they are folded into
/// an [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unsupported scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
    #[error("api domain must not be empty")]
    MissingDomain,
    #[error("invalid api base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}
