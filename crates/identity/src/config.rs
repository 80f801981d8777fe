use std::fmt;

use url::Url;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Location of the identity backend.
///
/// The base URL is always composed as `{scheme}://{domain}:{port}`; paths of
/// the individual operations are appended by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_scheme() -> String {
    "http".into()
}

fn default_domain() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            domain: default_domain(),
            port: default_port(),
        }
    }
}

impl ApiEndpoint {
    pub fn new(scheme: impl Into<String>, domain: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            domain: domain.into(),
            port,
        }
    }

    /// Parse the endpoint into a base URL, rejecting anything that is not a
    /// plain http(s) origin.
    pub fn base_url(&self) -> Result<Url, ClientError> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ClientError::UnsupportedScheme(self.scheme.clone()));
        }
        if self.domain.trim().is_empty() {
            return Err(ClientError::MissingDomain);
        }
        let raw = self.to_string();
        Url::parse(&raw).map_err(|source| ClientError::InvalidBaseUrl { url: raw, source })
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.domain.trim(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_domain_and_port() {
        let endpoint = ApiEndpoint::new("https", "api.dakasa.app", 8443);
        let url = endpoint.base_url().unwrap();
        assert_eq!(url.as_str(), "https://api.dakasa.app:8443/");
    }

    #[test]
    fn rejects_unknown_scheme() {
        let endpoint = ApiEndpoint::new("ftp", "localhost", 21);
        assert!(matches!(
            endpoint.base_url(),
            Err(ClientError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn rejects_blank_domain() {
        let endpoint = ApiEndpoint::new("http", "  ", 80);
        assert!(matches!(endpoint.base_url(), Err(ClientError::MissingDomain)));
    }

    #[test]
    fn defaults_point_to_local_backend() {
        assert_eq!(ApiEndpoint::default().to_string(), "http://localhost:3000");
    }
}
