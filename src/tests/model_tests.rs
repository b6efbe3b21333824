#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::mapping::{ ContactRequest, MappedProperty, PropertyMap };
    use crate::models::property::{ sort_by_label, PropertiesResponse, Property };
    use crate::models::record::{ FieldValue, Record, RecordField };

    #[test]
    fn property_map_replaces_in_place() {
        let mut map = PropertyMap::new();
        assert_eq!(map.insert("email", "a@example.com"), None);
        assert_eq!(map.insert("firstname", "Ada"), None);
        assert_eq!(map.insert("email", "b@example.com"), Some("a@example.com".to_string()));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("email"), Some("b@example.com"));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"email":"b@example.com","firstname":"Ada"}"#
        );
    }

    #[test]
    fn contact_request_wraps_properties() {
        let mut request = ContactRequest::default();
        request.properties.insert("lastname", "Lovelace");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "properties": { "lastname": "Lovelace" } })
        );
    }

    #[test]
    fn mappings_use_form_engine_keys() {
        let parsed: Vec<MappedProperty> = serde_json::from_str(
            r#"[{"formField":"f1","hubspotField":"email"}]"#
        ).unwrap();
        assert_eq!(parsed, vec![MappedProperty::new("f1", "email")]);
    }

    #[test]
    fn property_serialises_without_empty_optionals() {
        let value = serde_json::to_value(Property::new("email", "Email")).unwrap();
        assert_eq!(value, json!({ "name": "email", "label": "Email" }));
    }

    #[test]
    fn record_values_from_yaml() {
        let yaml = r#"
id: rec-1
formId: contact-form
fields:
  - fieldId: f-email
    alias: email
    values: ["a@example.com"]
  - fieldId: f-age
    values: [42]
  - fieldId: f-dob
    values: ["1815-12-10"]
  - fieldId: f-optin
    values: [true]
  - fieldId: f-score
    values: [4.5]
  - fieldId: f-secret
    sensitive: true
    values: ["hunter2"]
"#;
        let record: Record = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.fields.len(), 6);

        let render = |id: &str| record.get_record_field(id).unwrap().values_as_string(false);
        assert_eq!(render("f-email"), "a@example.com");
        assert_eq!(render("f-age"), "42");
        assert_eq!(render("f-dob"), "1815-12-10");
        assert_eq!(render("f-optin"), "true");
        assert_eq!(render("f-score"), "4.5");
        assert_eq!(render("f-secret"), "hunter2");

        assert_eq!(
            record.get_record_field("f-dob").unwrap().values[0],
            FieldValue::Text("1815-12-10".to_string())
        );
        assert!(record.get_record_field("missing").is_none());
    }

    #[test]
    fn sensitive_values_can_be_excluded() {
        let mut field = RecordField::text("f-secret", "hunter2");
        field.sensitive = true;
        assert_eq!(field.values_as_string(true), "");
        assert_eq!(field.values_as_string(false), "hunter2");

        let record = Record::new(vec![field, RecordField::text("f-name", "Ada")]);
        let filtered = record.without_sensitive_fields();
        assert!(filtered.get_record_field("f-secret").is_none());
        assert!(filtered.get_record_field("f-name").is_some());
        assert_eq!(filtered.created, record.created);
    }

    #[test]
    fn date_like_text_is_posted_verbatim() {
        let record: Record = serde_yaml::from_str(
            r#"
fields:
  - fieldId: f-when
    values: ["2024-1-5", "05/01/2024", "2024-01-05"]
"#
        ).unwrap();
        assert_eq!(
            record.get_record_field("f-when").unwrap().values_as_string(false),
            "2024-1-5, 05/01/2024, 2024-01-05"
        );
    }

    #[test]
    fn property_with_both_id_and_name_prefers_name() {
        let parsed: PropertiesResponse = serde_json::from_str(
            r#"{"results":[{"id":"1","name":"email","label":"Email"},{"id":"phone","label":"Phone"}]}"#
        ).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].name, "email");
        assert_eq!(parsed.results[0].id.as_deref(), Some("1"));
        assert_eq!(parsed.results[1].name, "phone");
    }

    #[test]
    fn labels_sort_ignoring_case() {
        let mut properties: Vec<Property> = ["Banana", "apple", "Éclair", "Date", "date"]
            .iter()
            .enumerate()
            .map(|(i, label)| Property::new(format!("p{}", i), *label))
            .collect();
        sort_by_label(&mut properties);

        let labels: Vec<&str> = properties.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["apple", "Banana", "Date", "date", "Éclair"]);
    }

    #[test]
    fn empty_field_renders_empty_string() {
        assert_eq!(RecordField::new("f", vec![]).values_as_string(false), "");
    }
}
