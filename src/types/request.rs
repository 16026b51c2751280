// src/types/request.rs
//! Wire payloads for the two search endpoints

use serde::Serialize;

use super::query::{ConditionQuery, NameQuery, SalaryMin};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRequest {
    pub company_name: String,
}

impl From<&NameQuery> for CompanyRequest {
    fn from(query: &NameQuery) -> Self {
        Self {
            company_name: query.company_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionRequest {
    pub industry: String,
    pub location: String,
    pub salary_min: SalaryMin,
    pub culture: String,
}

impl From<&ConditionQuery> for ConditionRequest {
    fn from(query: &ConditionQuery) -> Self {
        Self {
            industry: query.industry.clone(),
            location: query.location.clone(),
            salary_min: SalaryMin::parse(&query.salary_min),
            culture: query.culture.clone(),
        }
    }
}
