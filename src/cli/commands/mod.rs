pub mod map;
pub mod post;
pub mod properties;
pub mod validate;

use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use crate::models::record::Record;
use crate::implementations::workflow::WorkflowSettings;

/// Load a record from a YAML or JSON file. JSON is a subset of YAML.
pub fn load_record(path: &Path) -> Result<Record> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read record file {}: {}", path.display(), e))?;
    serde_yaml::from_str(&contents)
        .map_err(|e| anyhow!("Failed to parse record file {}: {}", path.display(), e))
}

/// Load field mappings stored in the form engine's JSON format
pub fn load_mappings(path: &Path) -> Result<WorkflowSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read mappings file {}: {}", path.display(), e))?;
    Ok(WorkflowSettings::from_json(&contents)?)
}
