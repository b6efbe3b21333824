#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{ Arc, Mutex };

    use crate::implementations::workflow::{ ContactSyncWorkflow, WorkflowSettings };
    use crate::models::common::{ CommandResult, WorkflowExecutionStatus };
    use crate::models::mapping::MappedProperty;
    use crate::models::property::Property;
    use crate::models::record::{ Record, RecordField };
    use crate::tests::support::{ configured_service, init_logging, FakeTransport };
    use crate::traits::contact_service::ContactService;
    use crate::traits::workflow::Workflow;

    /// Contact service that returns a fixed result and remembers what it was given
    struct StubService {
        result: CommandResult,
        seen: Mutex<Vec<(Vec<String>, usize)>>,
    }

    impl StubService {
        fn new(result: CommandResult) -> Arc<Self> {
            Arc::new(Self { result, seen: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl ContactService for StubService {
        async fn get_contact_properties(&self) -> Vec<Property> {
            Vec::new()
        }

        async fn post_contact(&self, record: &Record, field_mappings: &[MappedProperty]) -> CommandResult {
            let field_ids = record.fields.iter().map(|f| f.field_id.clone()).collect();
            self.seen.lock().unwrap().push((field_ids, field_mappings.len()));
            self.result
        }
    }

    fn record_with_sensitive_field() -> Record {
        let mut secret = RecordField::text("f-ssn", "123-45-6789");
        secret.sensitive = true;
        Record::new(vec![RecordField::text("f-email", "a@example.com"), secret])
    }

    fn settings() -> WorkflowSettings {
        WorkflowSettings::new(vec![
            MappedProperty::new("f-email", "email"),
            MappedProperty::new("f-ssn", "ssn"),
        ])
    }

    #[tokio::test]
    async fn command_results_map_to_statuses() {
        init_logging();
        let cases = [
            (CommandResult::Success, WorkflowExecutionStatus::Completed),
            (CommandResult::Failed, WorkflowExecutionStatus::Failed),
            (CommandResult::NotConfigured, WorkflowExecutionStatus::NotConfigured),
        ];
        for (result, expected) in cases {
            let workflow = ContactSyncWorkflow::new(StubService::new(result), settings());
            assert_eq!(workflow.execute(&record_with_sensitive_field()).await, expected);
        }
    }

    #[tokio::test]
    async fn sensitive_fields_are_hidden_by_default() {
        let service = StubService::new(CommandResult::Success);
        let workflow = ContactSyncWorkflow::new(service.clone(), settings());

        workflow.execute(&record_with_sensitive_field()).await;

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen[0], (vec!["f-email".to_string()], 2));
    }

    #[tokio::test]
    async fn sensitive_fields_included_when_enabled() {
        let service = StubService::new(CommandResult::Success);
        let mut settings = settings();
        settings.include_sensitive_data = true;
        let workflow = ContactSyncWorkflow::new(service.clone(), settings);

        workflow.execute(&record_with_sensitive_field()).await;

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen[0].0, vec!["f-email".to_string(), "f-ssn".to_string()]);
    }

    #[tokio::test]
    async fn end_to_end_post_omits_hidden_sensitive_field() {
        init_logging();
        let transport = FakeTransport::replying(201, "{}");
        let service = Arc::new(configured_service(&transport));
        let workflow = ContactSyncWorkflow::new(service, settings());

        let status = workflow.execute(&record_with_sensitive_field()).await;

        assert_eq!(status, WorkflowExecutionStatus::Completed);
        assert_eq!(transport.posted_json(), json!({ "properties": { "email": "a@example.com" } }));
    }

    #[test]
    fn empty_mappings_are_invalid() {
        let workflow = ContactSyncWorkflow::new(
            StubService::new(CommandResult::Success),
            WorkflowSettings::default()
        );
        let issues = workflow.validate_settings();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].setting, "FieldMappings");
    }

    #[test]
    fn incomplete_mappings_are_reported_by_position() {
        let workflow = ContactSyncWorkflow::new(
            StubService::new(CommandResult::Success),
            WorkflowSettings::new(vec![
                MappedProperty::new("f-email", "email"),
                MappedProperty::new("", "firstname"),
                MappedProperty::new("f-last", " "),
            ])
        );
        let messages: Vec<String> = workflow
            .validate_settings()
            .into_iter()
            .map(|issue| issue.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Mapping 2 is missing a form field".to_string(),
                "Mapping 3 is missing a HubSpot field".to_string()
            ]
        );
    }

    #[test]
    fn valid_mappings_have_no_issues() {
        let workflow = ContactSyncWorkflow::new(StubService::new(CommandResult::Success), settings());
        assert!(workflow.validate_settings().is_empty());
        assert_eq!(workflow.name(), "Save Contact to HubSpot");
    }

    #[test]
    fn settings_round_trip_through_form_engine_json() {
        let parsed = WorkflowSettings::from_json(
            r#"[{"formField":"f-email","hubspotField":"email"},{"formField":"f-ssn","hubspotField":"ssn"}]"#
        ).unwrap();
        assert_eq!(parsed, settings());

        let reparsed = WorkflowSettings::from_json(&parsed.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn blank_settings_json_means_no_mappings() {
        assert_eq!(WorkflowSettings::from_json("  ").unwrap(), WorkflowSettings::default());
        assert!(WorkflowSettings::from_json("{not json").is_err());
    }
}
