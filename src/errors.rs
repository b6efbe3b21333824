use thiserror::Error;

/// Error types for contact synchronisation
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("No API key has been configured (setting: {0})")]
    NotConfigured(String),

    #[error("HubSpot API rejected the request: {status} {reason}")]
    RemoteRejected { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response from HubSpot API: {0}")]
    InvalidResponse(String),

    #[error("Invalid API endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Invalid workflow settings: {0}")]
    InvalidSettings(String),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// Result type specific to sync operations
pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// Whether this error is an expected, non-fatal condition rather than a fault
    pub fn is_not_configured(&self) -> bool {
        matches!(self, SyncError::NotConfigured(_))
    }
}
