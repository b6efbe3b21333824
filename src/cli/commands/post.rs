use anyhow::{ anyhow, Result };
use std::path::Path;
use std::sync::Arc;

use crate::cli::commands::{ load_mappings, load_record };
use crate::cli::ui;
use crate::implementations::workflow::ContactSyncWorkflow;
use crate::models::common::WorkflowExecutionStatus;
use crate::traits::contact_service::ContactService;
use crate::traits::workflow::Workflow;

/// Run the contact workflow once for a record file
pub async fn execute(
    service: Arc<dyn ContactService>,
    record_path: &Path,
    mappings_path: &Path,
    include_sensitive: bool,
) -> Result<()> {
    ui::print_header("Posting Contact to HubSpot");

    let record = load_record(record_path)?;
    let mut settings = load_mappings(mappings_path)?;
    settings.include_sensitive_data = include_sensitive;

    ui::print_result("Record", if record.id.is_empty() { "(no id)" } else { record.id.as_str() });
    ui::print_result("Fields", &record.fields.len().to_string());
    ui::print_result("Mappings", &settings.field_mappings.len().to_string());

    let workflow = ContactSyncWorkflow::new(service, settings);
    let issues = workflow.validate_settings();
    if !issues.is_empty() {
        ui::print_warning("The field mappings have problems:");
        ui::print_settings_issues(&issues);
    }

    let spinner = ui::spinner_with_message("Submitting contact...");
    let status = workflow.execute(&record).await;
    spinner.finish_and_clear();

    ui::print_workflow_status(&status);
    match status {
        WorkflowExecutionStatus::Completed => {
            ui::print_success("Contact saved to HubSpot");
            Ok(())
        }
        WorkflowExecutionStatus::NotConfigured => {
            Err(anyhow!("No HubSpot API key is configured"))
        }
        WorkflowExecutionStatus::Failed => {
            Err(anyhow!("HubSpot did not accept the contact; see the log for details"))
        }
    }
}
