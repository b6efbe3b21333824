use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::{SyncError, SyncResult};
use crate::models::common::WorkflowExecutionStatus;
use crate::models::mapping::MappedProperty;
use crate::models::record::Record;
use crate::traits::contact_service::ContactService;
use crate::traits::workflow::{SettingsIssue, Workflow};

const FIELD_MAPPINGS_SETTING: &str = "FieldMappings";

/// Settings an administrator configures on the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    #[serde(default)]
    pub field_mappings: Vec<MappedProperty>,
    #[serde(default)]
    pub include_sensitive_data: bool,
}

impl WorkflowSettings {
    pub fn new(field_mappings: Vec<MappedProperty>) -> Self {
        Self {
            field_mappings,
            include_sensitive_data: false,
        }
    }

    /// Parse the field mappings as stored by the form engine: a JSON array of
    /// `{ "formField": ..., "hubspotField": ... }` objects.
    pub fn from_json(field_mappings: &str) -> SyncResult<Self> {
        if field_mappings.trim().is_empty() {
            return Ok(Self::default());
        }
        let field_mappings: Vec<MappedProperty> = serde_json::from_str(field_mappings)
            .map_err(|e| SyncError::InvalidSettings(format!("{}: {}", FIELD_MAPPINGS_SETTING, e)))?;
        Ok(Self::new(field_mappings))
    }

    pub fn to_json(&self) -> SyncResult<String> {
        Ok(serde_json::to_string_pretty(&self.field_mappings)?)
    }
}

/// Workflow that saves a form submission as a HubSpot contact
pub struct ContactSyncWorkflow {
    service: Arc<dyn ContactService>,
    settings: WorkflowSettings,
}

impl ContactSyncWorkflow {
    pub fn new(service: Arc<dyn ContactService>, settings: WorkflowSettings) -> Self {
        Self { service, settings }
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }
}

#[async_trait]
impl Workflow for ContactSyncWorkflow {
    fn name(&self) -> &str {
        "Save Contact to HubSpot"
    }

    fn validate_settings(&self) -> Vec<SettingsIssue> {
        let mut issues = Vec::new();
        if self.settings.field_mappings.is_empty() {
            issues.push(SettingsIssue {
                setting: FIELD_MAPPINGS_SETTING.to_string(),
                message: "At least one field mapping is required".to_string(),
            });
        }
        for (index, mapping) in self.settings.field_mappings.iter().enumerate() {
            if mapping.form_field.trim().is_empty() {
                issues.push(SettingsIssue {
                    setting: FIELD_MAPPINGS_SETTING.to_string(),
                    message: format!("Mapping {} is missing a form field", index + 1),
                });
            }
            if mapping.hubspot_field.trim().is_empty() {
                issues.push(SettingsIssue {
                    setting: FIELD_MAPPINGS_SETTING.to_string(),
                    message: format!("Mapping {} is missing a HubSpot field", index + 1),
                });
            }
        }
        issues
    }

    async fn execute(&self, record: &Record) -> WorkflowExecutionStatus {
        // The form engine hides sensitive values from workflows unless allowed
        let filtered;
        let record = if self.settings.include_sensitive_data {
            record
        } else {
            filtered = record.without_sensitive_fields();
            &filtered
        };

        let result = self.service
            .post_contact(record, &self.settings.field_mappings).await;
        let status = WorkflowExecutionStatus::from(result);
        match status {
            WorkflowExecutionStatus::NotConfigured => {
                warn!("Workflow {} is not configured; no contact was saved", self.name());
            }
            _ => info!("Workflow {} finished: {}", self.name(), status),
        }
        status
    }
}
