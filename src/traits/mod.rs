pub mod contact_service;
pub mod http_transport;
pub mod settings_provider;
pub mod workflow;

// Re-export traits
pub use contact_service::ContactService;
pub use http_transport::{HttpResponse, HttpTransport, TransportError};
pub use settings_provider::SettingsProvider;
pub use workflow::{SettingsIssue, Workflow};
