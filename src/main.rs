use std::collections::HashMap;
use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use log::{ debug, info, warn };
use crm_form_sync::{ errors, implementations, models, traits };
use crate::traits::SettingsProvider;
use crm_form_sync::{
    EnvSettings,
    HubspotContactService,
    LayeredSettings,
    ServiceConfig,
    API_KEY_SETTING,
};
mod cli;
use cli::{ SyncCli, Commands };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = SyncCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Pick up HUBSPOT_API_KEY and friends from a local .env file
    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServiceConfig::from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    let service = Arc::new(build_service(&config, cli.api_key.as_deref())?);

    // Handle commands
    match &cli.command {
        Commands::Properties { json } => {
            cli::commands::properties::execute(service.as_ref(), *json).await
        }
        Commands::Post { record, mappings, include_sensitive } => {
            cli::commands::post::execute(service, record, mappings, *include_sensitive).await
        }
        Commands::Map { record, output } => {
            cli::commands::map::execute(service.as_ref(), record, output).await
        }
        Commands::Validate { mappings } => {
            cli::commands::validate::execute(service, mappings)
        }
    }
}

/// Settings precedence: --api-key flag, config file, process environment
fn build_service(config: &ServiceConfig, api_key: Option<&str>) -> errors::SyncResult<HubspotContactService> {
    let mut overrides = HashMap::new();
    if let Some(key) = api_key {
        overrides.insert(API_KEY_SETTING.to_string(), key.to_string());
    }

    let settings = LayeredSettings::new()
        .with_layer(overrides)
        .with_layer(config.settings.clone())
        .with_layer(EnvSettings::new());

    if settings.get_setting(API_KEY_SETTING).is_none() {
        warn!("No {} setting found; HubSpot calls will be skipped", API_KEY_SETTING);
    }

    HubspotContactService::from_config(config, Arc::new(settings))
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
