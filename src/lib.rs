pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod orchestrator;
pub mod render;
pub mod types;

pub use crate::config::ClientConfig;
pub use crate::core::{ConfigManager, SearchBackend, ServiceClient};
pub use error::SearchError;
pub use orchestrator::{Orchestrator, RequestState, SearchMode};
pub use types::{
    AnalysisField, ConditionField, ConditionQuery, NameQuery, SalaryMin, SearchResponse,
    SearchResult,
};
