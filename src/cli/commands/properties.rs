use anyhow::Result;

use crate::cli::ui;
use crate::traits::contact_service::ContactService;

/// List the contact properties available for mapping
pub async fn execute<S: ContactService + ?Sized>(service: &S, json: bool) -> Result<()> {
    let spinner = ui::spinner_with_message("Fetching contact properties from HubSpot...");
    let properties = service.get_contact_properties().await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    ui::print_header("HubSpot Contact Properties");
    if properties.is_empty() {
        ui::print_warning(
            "No contact properties were returned. Check that an API key is configured and see the log for details."
        );
        return Ok(());
    }

    ui::print_properties(&properties);
    ui::print_info(format!("{} properties", properties.len()).as_str());
    Ok(())
}
