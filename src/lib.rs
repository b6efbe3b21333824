pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{API_KEY_SETTING, DEFAULT_API_BASE_URL};
pub use errors::{SyncError, SyncResult};
pub use implementations::config::{ConfigError, ServiceConfig};
pub use implementations::contact_service::{ApiEndpoint, HubspotContactService};
pub use implementations::reqwest_transport::ReqwestTransport;
pub use implementations::settings::{EnvSettings, LayeredSettings};
pub use implementations::workflow::{ContactSyncWorkflow, WorkflowSettings};
pub use models::{
    common::{CommandResult, WorkflowExecutionStatus},
    mapping::{ContactRequest, MappedProperty, PropertyMap},
    property::Property,
    record::{FieldValue, Record, RecordField},
};
pub use traits::{
    ContactService,
    HttpResponse,
    HttpTransport,
    SettingsIssue,
    SettingsProvider,
    TransportError,
    Workflow,
};
