use async_trait::async_trait;

use crate::models::common::WorkflowExecutionStatus;
use crate::models::record::Record;

/// A problem found while validating workflow settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsIssue {
    pub setting: String,
    pub message: String,
}

impl std::fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.setting, self.message)
    }
}

/// A workflow step hosted by the form engine and run on submission
#[async_trait]
pub trait Workflow: Send + Sync {
    /// Display name shown in the form engine
    fn name(&self) -> &str;

    /// Check the configured settings before the workflow is saved
    fn validate_settings(&self) -> Vec<SettingsIssue>;

    /// Run the workflow for a submitted record
    async fn execute(&self, record: &Record) -> WorkflowExecutionStatus;
}
