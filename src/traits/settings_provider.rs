use std::collections::HashMap;

/// Read access to the host's settings store
pub trait SettingsProvider: Send + Sync {
    /// Fetch a setting by name. `None` when the setting is absent.
    fn get_setting(&self, name: &str) -> Option<String>;
}

impl SettingsProvider for HashMap<String, String> {
    fn get_setting(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
