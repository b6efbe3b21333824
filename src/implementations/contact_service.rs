use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Url;
use std::sync::Arc;

use crate::config::{
    API_KEY_QUERY_PARAM,
    API_KEY_SETTING,
    CONTACTS_PATH,
    CONTACT_PROPERTIES_PATH,
    DEFAULT_API_BASE_URL,
};
use crate::errors::{SyncError, SyncResult};
use crate::implementations::config::ServiceConfig;
use crate::implementations::reqwest_transport::ReqwestTransport;
use crate::models::common::CommandResult;
use crate::models::mapping::{ContactRequest, MappedProperty};
use crate::models::property::{sort_by_label, PropertiesResponse, Property};
use crate::models::record::Record;
use crate::traits::contact_service::ContactService;
use crate::traits::http_transport::{HttpResponse, HttpTransport};
use crate::traits::settings_provider::SettingsProvider;

/// Base URL of the CRM API. Endpoint paths are resolved relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: Url,
}

impl ApiEndpoint {
    pub fn new(base_url: &str) -> SyncResult<Self> {
        // Url::join drops the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized).map_err(|e| SyncError::InvalidEndpoint {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(SyncError::InvalidEndpoint {
                url: base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self { base })
    }

    /// Absolute URL for `path` with the API key appended as a query credential
    pub fn url(&self, path: &str, api_key: &str) -> SyncResult<Url> {
        let mut url = self.base.join(path).map_err(|e| SyncError::InvalidEndpoint {
            url: format!("{}{}", self.base, path),
            message: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair(API_KEY_QUERY_PARAM, api_key);
        Ok(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid"),
        }
    }
}

/// `ContactService` that talks to the HubSpot CRM v3 API.
///
/// The API key is read from the settings provider on every call, so changes
/// to the host's settings take effect without rebuilding the service.
///
/// # Usage Example
/// ```rust,no_run
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use crm_form_sync::{
///     HubspotContactService,
///     implementations::reqwest_transport::ReqwestTransport,
///     traits::ContactService,
/// };
///
/// async fn list_properties() {
///     let mut settings = HashMap::new();
///     settings.insert("HubSpotApiKey".to_string(), "my-key".to_string());
///
///     let service = HubspotContactService::new(ReqwestTransport::shared(), Arc::new(settings));
///     for property in service.get_contact_properties().await {
///         println!("{} ({})", property.label, property.name);
///     }
/// }
/// ```
#[derive(Clone)]
pub struct HubspotContactService {
    transport: Arc<dyn HttpTransport>,
    settings: Arc<dyn SettingsProvider>,
    endpoint: ApiEndpoint,
}

impl HubspotContactService {
    /// Create a service against the public HubSpot API
    pub fn new(transport: Arc<dyn HttpTransport>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self::with_endpoint(transport, settings, ApiEndpoint::default())
    }

    pub fn with_endpoint(
        transport: Arc<dyn HttpTransport>,
        settings: Arc<dyn SettingsProvider>,
        endpoint: ApiEndpoint,
    ) -> Self {
        Self {
            transport,
            settings,
            endpoint,
        }
    }

    /// Build a service from loaded configuration, using the shared transport.
    /// `settings` is consulted for the API key; the config's own settings are not.
    pub fn from_config(
        config: &ServiceConfig,
        settings: Arc<dyn SettingsProvider>,
    ) -> SyncResult<Self> {
        let endpoint = ApiEndpoint::new(&config.api_base_url)?;
        Ok(Self::with_endpoint(ReqwestTransport::shared(), settings, endpoint))
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    fn api_key(&self) -> SyncResult<String> {
        match self.settings.get_setting(API_KEY_SETTING) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(SyncError::NotConfigured(API_KEY_SETTING.to_string())),
        }
    }

    /// Map record values onto HubSpot property names.
    ///
    /// Mappings are applied in order. A mapping whose form field is not in the
    /// record is skipped with a warning.
    pub fn build_contact_request(record: &Record, field_mappings: &[MappedProperty]) -> ContactRequest {
        let mut request = ContactRequest::default();
        for mapping in field_mappings {
            match record.get_record_field(&mapping.form_field) {
                Some(field) => {
                    let value = field.values_as_string(false);
                    if request.properties.insert(mapping.hubspot_field.as_str(), value).is_some() {
                        warn!(
                            "HubSpot field {} is mapped more than once; using the value of form field {}",
                            mapping.hubspot_field,
                            mapping.form_field
                        );
                    }
                }
                None => {
                    warn!(
                        "The field mapping with Id, {}, did not match any record fields. This is probably caused by the record field being marked as sensitive and the workflow has been set not to include sensitive data",
                        mapping.form_field
                    );
                }
            }
        }
        request
    }

    /// Fetch contact properties, reporting every failure as an error
    pub async fn try_get_contact_properties(&self) -> SyncResult<Vec<Property>> {
        let api_key = self.api_key()?;
        let url = self.endpoint.url(CONTACT_PROPERTIES_PATH, &api_key)?;

        debug!("Fetching contact properties from {}{}", self.endpoint.base(), CONTACT_PROPERTIES_PATH);
        let response = self.transport.get(url.as_str()).await?;
        ensure_success(&response)?;

        let parsed: PropertiesResponse = serde_json::from_str(&response.body)
            .map_err(|e| SyncError::InvalidResponse(e.to_string()))?;
        let mut properties = parsed.results;
        sort_by_label(&mut properties);

        info!("Fetched {} contact properties", properties.len());
        Ok(properties)
    }

    /// Post a contact, reporting every failure as an error
    pub async fn try_post_contact(
        &self,
        record: &Record,
        field_mappings: &[MappedProperty],
    ) -> SyncResult<()> {
        let api_key = self.api_key()?;
        let request = Self::build_contact_request(record, field_mappings);
        let body = serde_json::to_string(&request)?;
        let url = self.endpoint.url(CONTACTS_PATH, &api_key)?;

        debug!(
            "Posting {} mapped properties for record {}",
            request.properties.len(),
            record.id
        );
        let response = self.transport.post_json(url.as_str(), body).await?;
        ensure_success(&response)
    }
}

fn ensure_success(response: &HttpResponse) -> SyncResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(SyncError::RemoteRejected {
            status: response.status,
            reason: response.reason_phrase().to_string(),
        })
    }
}

#[async_trait]
impl ContactService for HubspotContactService {
    async fn get_contact_properties(&self) -> Vec<Property> {
        match self.try_get_contact_properties().await {
            Ok(properties) => properties,
            Err(SyncError::NotConfigured(_)) => {
                warn!(
                    "Failed to fetch contact properties from HubSpot API for mapping as no API Key has been configured."
                );
                Vec::new()
            }
            Err(SyncError::RemoteRejected { status, reason }) => {
                error!(
                    "Failed to fetch contact properties from HubSpot API for mapping. {} {}",
                    status,
                    reason
                );
                Vec::new()
            }
            Err(e) => {
                error!("Failed to fetch contact properties from HubSpot API for mapping: {}", e);
                Vec::new()
            }
        }
    }

    async fn post_contact(
        &self,
        record: &Record,
        field_mappings: &[MappedProperty],
    ) -> CommandResult {
        match self.try_post_contact(record, field_mappings).await {
            Ok(()) => {
                info!("Posted contact for record {} to HubSpot", record.id);
                CommandResult::Success
            }
            Err(SyncError::NotConfigured(_)) => {
                warn!(
                    "Failed to post contact details via the HubSpot API as no API Key has been configured."
                );
                CommandResult::NotConfigured
            }
            Err(e) => {
                error!("Error submitting a HubSpot contact request: {}", e);
                CommandResult::Failed
            }
        }
    }
}
