use serde::Serialize;

/// Outcome of a single attempt to post a contact to HubSpot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandResult {
    Success,
    Failed,
    NotConfigured,
}

/// Status reported back to the form engine after a workflow has run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowExecutionStatus {
    Completed,
    Failed,
    NotConfigured,
}

impl From<CommandResult> for WorkflowExecutionStatus {
    fn from(result: CommandResult) -> Self {
        match result {
            CommandResult::Success => WorkflowExecutionStatus::Completed,
            CommandResult::Failed => WorkflowExecutionStatus::Failed,
            CommandResult::NotConfigured => WorkflowExecutionStatus::NotConfigured,
        }
    }
}

impl std::fmt::Display for WorkflowExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WorkflowExecutionStatus::Completed => "completed",
            WorkflowExecutionStatus::Failed => "failed",
            WorkflowExecutionStatus::NotConfigured => "not configured",
        };
        f.write_str(label)
    }
}
