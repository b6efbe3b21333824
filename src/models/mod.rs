pub mod common;
pub mod mapping;
pub mod property;
pub mod record;

// Re-export common model types
pub use common::{CommandResult, WorkflowExecutionStatus};
pub use mapping::{ContactRequest, MappedProperty, PropertyMap};
pub use property::{PropertiesResponse, Property};
pub use record::{FieldValue, Record, RecordField};
