use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "crm-form-sync",
    about = "Sync form submissions to HubSpot contacts",
    version,
    author,
    long_about = None
)]
pub struct SyncCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// HubSpot API key, overriding the configuration file and environment
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the HubSpot contact properties available for mapping
    Properties {
        /// Print the properties as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Post a form submission to HubSpot as a contact
    Post {
        /// Path to the record file (YAML or JSON)
        #[arg(short, long)]
        record: PathBuf,

        /// Path to the field mappings file (JSON, as stored by the form engine)
        #[arg(short, long)]
        mappings: PathBuf,

        /// Include fields marked as sensitive
        #[arg(long, default_value = "false")]
        include_sensitive: bool,
    },

    /// Interactively build field mappings for a form
    Map {
        /// Sample record of the form whose fields should be mapped
        #[arg(short, long)]
        record: PathBuf,

        /// Output file for the field mappings
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Validate a field mappings file
    Validate {
        /// Path to the field mappings file
        #[arg(short, long)]
        mappings: PathBuf,
    },
}
