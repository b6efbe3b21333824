use serde::{Deserialize, Serialize};

/// A HubSpot contact property that form fields can be mapped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProperty")]
pub struct Property {
    /// Internal property name, used as the key when posting contacts
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
}

/// Property as it appears on the wire. Some payloads carry `id` instead of
/// `name`, some carry both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    field_type: Option<String>,
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        let name = raw.name.or_else(|| raw.id.clone()).unwrap_or_default();
        Self {
            name,
            label: raw.label,
            id: raw.id,
            description: raw.description,
            group_name: raw.group_name,
            kind: raw.kind,
            field_type: raw.field_type,
        }
    }
}

impl Property {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            id: None,
            description: None,
            group_name: None,
            kind: None,
            field_type: None,
        }
    }
}

/// Body of the "list contact properties" response. Only the fields we use are kept.
#[derive(Debug, Deserialize)]
pub struct PropertiesResponse {
    #[serde(default)]
    pub results: Vec<Property>,
}

/// Sort properties by label ignoring case, then by the exact label.
/// Equal labels keep the API's order.
pub fn sort_by_label(properties: &mut [Property]) {
    properties.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.label.cmp(&b.label))
    });
}
