use async_trait::async_trait;

use crate::models::common::CommandResult;
use crate::models::mapping::MappedProperty;
use crate::models::property::Property;
use crate::models::record::Record;

/// Syncs form submissions to CRM contacts
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Fetch the contact properties available for mapping, sorted by label.
    /// Returns an empty list when not configured or when the CRM call fails.
    async fn get_contact_properties(&self) -> Vec<Property>;

    /// Post the mapped values of a record as a new contact
    async fn post_contact(
        &self,
        record: &Record,
        field_mappings: &[MappedProperty],
    ) -> CommandResult;
}
