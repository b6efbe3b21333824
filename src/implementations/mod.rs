pub mod config;
pub mod contact_service;
pub mod reqwest_transport;
pub mod settings;
pub mod workflow;
