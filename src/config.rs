/// Name of the setting that holds the HubSpot API key
pub const API_KEY_SETTING: &str = "HubSpotApiKey";

/// Version-pinned base path of the HubSpot CRM API
pub const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com/crm/v3/";

/// Query parameter used to pass the API key
pub const API_KEY_QUERY_PARAM: &str = "hapikey";

/// Path of the "list contact properties" endpoint, relative to the base
pub const CONTACT_PROPERTIES_PATH: &str = "properties/contacts";

/// Path of the "create contact" endpoint, relative to the base
pub const CONTACTS_PATH: &str = "objects/contacts";
