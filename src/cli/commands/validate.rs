use anyhow::{ anyhow, Result };
use std::path::Path;
use std::sync::Arc;

use crate::cli::commands::load_mappings;
use crate::cli::ui;
use crate::implementations::workflow::ContactSyncWorkflow;
use crate::traits::contact_service::ContactService;
use crate::traits::workflow::Workflow;

/// Validate a field mappings file without contacting HubSpot
pub fn execute(service: Arc<dyn ContactService>, mappings_path: &Path) -> Result<()> {
    ui::print_header("Validating Field Mappings");

    let settings = load_mappings(mappings_path)?;
    for mapping in &settings.field_mappings {
        ui::print_result(&mapping.form_field, &mapping.hubspot_field);
    }

    let workflow = ContactSyncWorkflow::new(service, settings);
    let issues = workflow.validate_settings();
    if issues.is_empty() {
        ui::print_success("Field mappings are valid");
        return Ok(());
    }

    ui::print_error(format!("Found {} problem(s):", issues.len()).as_str());
    ui::print_settings_issues(&issues);
    Err(anyhow!("Field mappings are invalid"))
}
