// src/core/mod.rs
//! Configuration loading and the HTTP boundary to the search backend

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::{SearchBackend, ServiceClient};
