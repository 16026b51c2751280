// src/types/mod.rs
pub mod query;
pub mod request;
pub mod response;

pub use query::{ConditionField, ConditionQuery, NameQuery, SalaryMin};
pub use request::{CompanyRequest, ConditionRequest};
pub use response::{AnalysisField, ErrorDetail, SearchResponse, SearchResult};
