use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use tracing::event;

use super::error::{Result, UpdateError};

/// Status and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// What the mock answers for one url.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(HttpResponse),
    /// The connection fails before any status arrives.
    Unreachable(String),
}

/// In memory stand in for the update host.
#[derive(Debug, Default)]
pub struct MockServer {
    routes: HashMap<String, MockResponse>,
    requests: RefCell<Vec<String>>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a 200 and `body`.
    pub fn with_body(self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.to_string(),
            MockResponse::Reply(HttpResponse {
                status,
                body: body.into(),
            }),
        );
        self
    }

    pub fn with_unreachable(mut self, url: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            MockResponse::Unreachable("connection refused".to_string()),
        );
        self
    }

    /// Every url requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(MockResponse::Reply(r)) => Ok(r.clone()),
            Some(MockResponse::Unreachable(reason)) => Err(UpdateError::Request {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: b"Not Found".to_vec(),
            }),
        }
    }
}

pub enum UpdateClient {
    /// For production - blocking reqwest client
    Http(reqwest::blocking::Client),
    /// For testing - answers from a fixed route table
    Mock(MockServer),
}

impl UpdateClient {
    /// Build the HTTP client. `None` means requests never time out.
    pub fn new_http(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("casino/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| UpdateError::Client(e.to_string()))?;
        Ok(UpdateClient::Http(client))
    }

    pub fn new_mock(server: MockServer) -> Self {
        UpdateClient::Mock(server)
    }

    /// The mock server, for inspecting requests in tests.
    pub fn mock(&self) -> Option<&MockServer> {
        match self {
            UpdateClient::Mock(server) => Some(server),
            UpdateClient::Http(_) => None,
        }
    }

    /// One GET. Any status is returned as a response; only transport
    /// failures are errors.
    pub fn get(&self, url: &str) -> Result<HttpResponse> {
        event!(tracing::Level::DEBUG, url, "GET");
        let response = match self {
            UpdateClient::Http(client) => http_get(client, url),
            UpdateClient::Mock(server) => server.get(url),
        }?;
        event!(tracing::Level::DEBUG, url, status = response.status, bytes = response.body.len(), "Response");
        Ok(response)
    }

    /// GET that treats a non success status as an error.
    pub fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url)?;
        if !response.is_success() {
            return Err(UpdateError::Status(response.status));
        }
        Ok(response.body)
    }
}

fn http_get(client: &reqwest::blocking::Client, url: &str) -> Result<HttpResponse> {
    let request_error = |e: reqwest::Error| UpdateError::Request {
        url: url.to_string(),
        reason: e.to_string(),
    };
    let response = client.get(url).send().map_err(request_error)?;
    let status = response.status().as_u16();
    let body = response.bytes().map_err(request_error)?.to_vec();
    Ok(HttpResponse { status, body })
}
