use log::debug;

use crate::traits::settings_provider::SettingsProvider;

/// Reads settings from the process environment.
///
/// A setting named `HubSpotApiKey` is looked up as `HubSpotApiKey` first and
/// then as `HUBSPOT_API_KEY`.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings;

impl EnvSettings {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsProvider for EnvSettings {
    fn get_setting(&self, name: &str) -> Option<String> {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        let env_name = env_var_name(name);
        debug!("Setting {} not in environment, trying {}", name, env_name);
        std::env::var(env_name).ok()
    }
}

/// Convert a PascalCase setting name to SCREAMING_SNAKE_CASE.
/// The product name stays one word: `HubSpotApiKey` -> `HUBSPOT_API_KEY`.
pub fn env_var_name(setting: &str) -> String {
    let normalized = setting.replace("HubSpot", "Hubspot");
    let mut out = String::with_capacity(normalized.len() + 4);
    let mut prev_lower = false;
    for c in normalized.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Tries each provider in order and returns the first non-empty value
#[derive(Default)]
pub struct LayeredSettings {
    layers: Vec<Box<dyn SettingsProvider>>,
}

impl LayeredSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: impl SettingsProvider + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }
}

impl SettingsProvider for LayeredSettings {
    fn get_setting(&self, name: &str) -> Option<String> {
        self.layers
            .iter()
            .filter_map(|layer| layer.get_setting(name))
            .find(|value| !value.is_empty())
    }
}
