use async_trait::async_trait;
use log::{debug, warn};
use std::sync::{Arc, OnceLock};

use crate::traits::http_transport::{HttpResponse, HttpTransport, TransportError};

static SHARED: OnceLock<Arc<ReqwestTransport>> = OnceLock::new();

/// `HttpTransport` backed by a pooled `reqwest::Client`
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Process-wide transport, created on first use and reused afterwards
    pub fn shared() -> Arc<ReqwestTransport> {
        SHARED.get_or_init(|| Arc::new(ReqwestTransport::default())).clone()
    }

    async fn into_response(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let head = response_status(&response);
        let body = response.text().await.map_err(map_reqwest_error)?;
        Ok(HttpResponse { body, ..head })
    }
}

/// Status line only; the body is left unread
fn response_status(response: &reqwest::Response) -> HttpResponse {
    let status = response.status();
    HttpResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().map(str::to_string),
        body: String::new(),
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    // Strip the URL so the API key in the query never reaches the logs
    let e = e.without_url();
    if e.is_timeout() {
        warn!("Request timed out");
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        warn!("Connection error - check network connectivity");
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!("Sending GET request");
        let response = self.http_client
            .get(url)
            .send().await
            .map_err(map_reqwest_error)?;
        Self::into_response(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError> {
        debug!("Sending POST request ({} bytes)", body.len());
        let response = self.http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send().await
            .map_err(map_reqwest_error)?;
        // Only the status decides the outcome of a POST
        Ok(response_status(&response))
    }
}
