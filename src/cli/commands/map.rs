use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use crate::cli::commands::load_record;
use crate::cli::ui;
use crate::implementations::workflow::WorkflowSettings;
use crate::models::mapping::MappedProperty;
use crate::traits::contact_service::ContactService;

/// Build field mappings by picking a HubSpot property for each form field
pub async fn execute<S: ContactService + ?Sized>(
    service: &S,
    record_path: &Path,
    output_path: &Path,
) -> Result<()> {
    ui::print_header("Configure Field Mappings");

    let record = load_record(record_path)?;
    if record.fields.is_empty() {
        return Err(anyhow!("The record in {} has no fields to map", record_path.display()));
    }

    let spinner = ui::spinner_with_message("Fetching contact properties from HubSpot...");
    let properties = service.get_contact_properties().await;
    spinner.finish_and_clear();

    if properties.is_empty() {
        return Err(
            anyhow!("No contact properties are available; check the API key and the log output")
        );
    }

    ui::print_text(
        &format!(
            "Choose the HubSpot contact property each of the {} form fields should be saved as. Fields that are skipped are not sent to HubSpot.",
            record.fields.len()
        )
    );

    let mut mappings = Vec::new();
    for field in &record.fields {
        if let Some(property) = ui::select_property(field, &properties)? {
            mappings.push(MappedProperty::new(field.field_id.as_str(), property.name.as_str()));
        }
    }

    if mappings.is_empty() {
        ui::print_warning("No fields were mapped");
    }

    if output_path.exists() {
        let prompt = format!("{} exists. Overwrite it?", output_path.display());
        if !ui::confirm_action(&prompt)? {
            ui::print_info("Mappings were not saved");
            return Ok(());
        }
    }

    let settings = WorkflowSettings::new(mappings);
    fs::write(output_path, settings.to_json()?)?;
    ui::print_success(
        format!(
            "Saved {} mapping(s) to {}",
            settings.field_mappings.len(),
            output_path.display()
        ).as_str()
    );
    Ok(())
}
