use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value submitted for a form field. Strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// A submitted form field and its values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordField {
    pub field_id: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

impl RecordField {
    pub fn new(field_id: impl Into<String>, values: Vec<FieldValue>) -> Self {
        Self {
            field_id: field_id.into(),
            alias: String::new(),
            caption: String::new(),
            sensitive: false,
            values,
        }
    }

    pub fn text(field_id: impl Into<String>, value: &str) -> Self {
        Self::new(field_id, vec![FieldValue::from(value)])
    }

    /// Render all values as one string, joined with ", ".
    /// Sensitive fields render empty when `exclude_sensitive` is set.
    pub fn values_as_string(&self, exclude_sensitive: bool) -> String {
        if exclude_sensitive && self.sensitive {
            return String::new();
        }
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Label used when presenting the field to an administrator
    pub fn display_name(&self) -> &str {
        if !self.caption.is_empty() {
            &self.caption
        } else if !self.alias.is_empty() {
            &self.alias
        } else {
            &self.field_id
        }
    }
}

/// One form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub form_id: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub fields: Vec<RecordField>,
}

impl Record {
    pub fn new(fields: Vec<RecordField>) -> Self {
        Self {
            id: String::new(),
            form_id: String::new(),
            created: Utc::now(),
            fields,
        }
    }

    /// Look up a field by its id
    pub fn get_record_field(&self, field_id: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// Copy of this record with sensitive fields removed
    pub fn without_sensitive_fields(&self) -> Record {
        Record {
            fields: self.fields.iter().filter(|f| !f.sensitive).cloned().collect(),
            ..self.clone()
        }
    }
}
