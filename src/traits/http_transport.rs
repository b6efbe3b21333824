use async_trait::async_trait;
use thiserror::Error;

/// Failure below the HTTP status level: DNS, connection, timeout, body read
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl From<TransportError> for crate::errors::SyncError {
    fn from(err: TransportError) -> Self {
        crate::errors::SyncError::Transport(err.to_string())
    }
}

/// Status, reason phrase and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn reason_phrase(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}

/// Outbound HTTP seam used by the contact service.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// POST a JSON body with `Content-Type: application/json`.
    /// Implementations may leave the response body empty.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError>;
}
