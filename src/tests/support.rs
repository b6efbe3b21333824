use async_trait::async_trait;
use std::collections::{ HashMap, VecDeque };
use std::sync::{ Arc, Mutex };

use crate::config::API_KEY_SETTING;
use crate::implementations::contact_service::HubspotContactService;
use crate::traits::http_transport::{ HttpResponse, HttpTransport, TransportError };
use crate::traits::settings_provider::SettingsProvider;

pub const TEST_API_KEY: &str = "test-key";

/// A request seen by `FakeTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Get { url: String },
    Post { url: String, body: String },
}

impl RecordedCall {
    pub fn url(&self) -> &str {
        match self {
            RecordedCall::Get { url } | RecordedCall::Post { url, .. } => url,
        }
    }
}

type Reply = Result<HttpResponse, TransportError>;

/// Transport that records requests and replays canned responses.
/// When the queue runs dry it answers 200 with an empty JSON object.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::new();
        transport.push_reply(status, body);
        transport
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        let transport = Self::new();
        transport.replies.lock().unwrap().push_back(Err(error));
        transport
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Body of the only POST request, parsed as JSON
    pub fn posted_json(&self) -> serde_json::Value {
        let posts: Vec<String> = self
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Post { body, .. } => Some(body),
                _ => None,
            })
            .collect();
        assert_eq!(posts.len(), 1, "expected exactly one POST");
        serde_json::from_str(&posts[0]).expect("posted body is JSON")
    }

    fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall::Get { url: url.to_string() });
        self.next_reply()
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall::Post { url: url.to_string(), body });
        self.next_reply()
    }
}

pub fn settings_with_key(key: &str) -> Arc<dyn SettingsProvider> {
    let mut settings = HashMap::new();
    settings.insert(API_KEY_SETTING.to_string(), key.to_string());
    Arc::new(settings)
}

pub fn no_settings() -> Arc<dyn SettingsProvider> {
    Arc::new(HashMap::<String, String>::new())
}

/// Service wired to the fake transport with the test API key configured
pub fn configured_service(transport: &Arc<FakeTransport>) -> HubspotContactService {
    HubspotContactService::new(transport.clone(), settings_with_key(TEST_API_KEY))
}

pub fn unconfigured_service(transport: &Arc<FakeTransport>) -> HubspotContactService {
    HubspotContactService::new(transport.clone(), no_settings())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
