//! Integration tests for `IdentityClient` against a local stub backend.
//!
//! The stub is a plain tokio `TcpListener` that answers every request with
//! one canned status/body and records what it received. No mock-server
//! dependency is needed for this.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use identity::{
    ApiEndpoint, Failure, IdentityClient, LoginRequest, RecoveryCloseRequest,
    RecoveryCreateRequest, RecoveryValidateRequest, RegistrationRequest,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: Value,
}

struct Stub {
    port: u16,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let log = log.clone();
                tokio::spawn(async move {
                    let request = read_request(&mut socket).await;
                    log.lock().unwrap().push(request);
                    let response = format!(
                        "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { port, seen }
    }

    fn client(&self) -> IdentityClient {
        IdentityClient::new(&ApiEndpoint::new("http", "127.0.0.1", self.port)).unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap().split_whitespace();
    let method = request_line.next().unwrap().to_string();
    let path = request_line.next().unwrap().to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map(|(_, v)| v.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = &buf[header_end..header_end + content_length];
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).unwrap()
    };

    Recorded { method, path, body }
}

fn registration() -> RegistrationRequest {
    RegistrationRequest {
        username: "potato".into(),
        email: "potato@dakasa.app".into(),
        password: "Potato123*".into(),
        name: "Batata".into(),
        birthday: NaiveDate::from_ymd_opt(2000, 1, 31).unwrap(),
        phone_number: None,
        address: None,
        avatar: None,
    }
}

#[tokio::test]
async fn register_created_is_success() {
    let stub = Stub::start(201, "{}").await;
    let outcome = stub.client().register(&registration()).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status, Some(201));
    assert_eq!(outcome.message(), "");

    let seen = stub.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].path, "/api/register");
    assert_eq!(seen[0].body["username"], "potato");
    assert_eq!(seen[0].body["birthday"], "2000-01-31");
}

#[tokio::test]
async fn register_conflict_is_duplicate_user() {
    let stub = Stub::start(409, r#"{"error":"exists"}"#).await;
    let outcome = stub.client().register(&registration()).await;

    assert_eq!(outcome.status, Some(409));
    assert_eq!(outcome.result, Err(Failure::DuplicateUser));
    assert_eq!(outcome.message(), Failure::DuplicateUser.to_string());
}

#[tokio::test]
async fn login_forbidden_is_bad_credentials() {
    let stub = Stub::start(403, "{}").await;
    let outcome = stub
        .client()
        .login(&LoginRequest::new("potato", "Potato123*"))
        .await;

    assert_eq!(outcome.result, Err(Failure::BadCredentials));
    let seen = stub.requests();
    assert_eq!(seen[0].path, "/api/login");
    assert_eq!(seen[0].body["identifier"], "potato");
}

#[tokio::test]
async fn login_server_error_is_generic() {
    let stub = Stub::start(500, "{}").await;
    let outcome = stub
        .client()
        .login(&LoginRequest::new("potato", "Potato123*"))
        .await;

    assert_eq!(outcome.status, Some(500));
    assert_eq!(outcome.result, Err(Failure::Unexpected));
}

#[tokio::test]
async fn create_ticket_returns_ticket_id() {
    let stub = Stub::start(200, r#"{"ticketId":"abc-123"}"#).await;
    let outcome = stub
        .client()
        .create_recovery_ticket(&RecoveryCreateRequest {
            identifier: "potato@dakasa.app".into(),
        })
        .await;

    assert_eq!(outcome.result, Ok("abc-123".to_string()));
    assert_eq!(stub.requests()[0].path, "/api/recovery/create");
}

#[tokio::test]
async fn create_ticket_without_ticket_in_body_is_generic() {
    let stub = Stub::start(200, "{}").await;
    let outcome = stub
        .client()
        .create_recovery_ticket(&RecoveryCreateRequest {
            identifier: "potato@dakasa.app".into(),
        })
        .await;

    assert_eq!(outcome.status, Some(200));
    assert_eq!(outcome.result, Err(Failure::Unexpected));
}

#[tokio::test]
async fn validate_gone_is_code_expired() {
    let stub = Stub::start(410, "{}").await;
    let outcome = stub
        .client()
        .validate_recovery_ticket(&RecoveryValidateRequest {
            ticket: "abc-123".into(),
            code: "123456".into(),
        })
        .await;

    assert_eq!(outcome.result, Err(Failure::CodeExpired));
    let seen = stub.requests();
    assert_eq!(seen[0].path, "/api/recovery/validate");
    assert_eq!(seen[0].body["ticket"], "abc-123");
    assert_eq!(seen[0].body["code"], "123456");
}

#[tokio::test]
async fn close_ticket_surfaces_server_message() {
    let stub = Stub::start(200, r#"{"message":"Senha alterada!"}"#).await;
    let outcome = stub
        .client()
        .close_recovery_ticket(&RecoveryCloseRequest {
            ticket: "abc-123".into(),
            password: "Potato123*".into(),
        })
        .await;

    assert_eq!(outcome.result, Ok("Senha alterada!".to_string()));
    assert_eq!(stub.requests()[0].path, "/api/recovery/chall");
}

#[tokio::test]
async fn close_ticket_bad_request_is_generic() {
    let stub = Stub::start(400, "{}").await;
    let outcome = stub
        .client()
        .close_recovery_ticket(&RecoveryCloseRequest {
            ticket: "abc-123".into(),
            password: "Potato123*".into(),
        })
        .await;

    assert_eq!(outcome.result, Err(Failure::Unexpected));
}

#[tokio::test]
async fn unreachable_backend_is_generic_without_status() {
    // Bind and drop to get a port nobody listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = IdentityClient::new(&ApiEndpoint::new("http", "127.0.0.1", port)).unwrap();
    let outcome = client.login(&LoginRequest::new("potato", "Potato123*")).await;

    assert_eq!(outcome.status, None);
    assert_eq!(outcome.result, Err(Failure::Unexpected));
}
