// src/types/query.rs
//! User-editable search inputs for the two query modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input of the company-name search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameQuery {
    pub company_name: String,
}

impl NameQuery {
    pub fn new(company_name: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
        }
    }
}

/// Input of the condition search form. Every field is kept as typed text;
/// `salary_min` only becomes a number when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionQuery {
    pub industry: String,
    pub location: String,
    pub salary_min: String,
    pub culture: String,
}

/// Addresses one field of a [`ConditionQuery`] for partial updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionField {
    Industry,
    Location,
    SalaryMin,
    Culture,
}

impl ConditionField {
    pub const ALL: [ConditionField; 4] = [
        ConditionField::Industry,
        ConditionField::Location,
        ConditionField::SalaryMin,
        ConditionField::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionField::Industry => "industry",
            ConditionField::Location => "location",
            ConditionField::SalaryMin => "salary_min",
            ConditionField::Culture => "culture",
        }
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "industry" => Ok(ConditionField::Industry),
            "location" => Ok(ConditionField::Location),
            "salary_min" | "salary" => Ok(ConditionField::SalaryMin),
            "culture" => Ok(ConditionField::Culture),
            other => anyhow::bail!(
                "Unknown condition field: {}. Use industry, location, salary_min or culture",
                other
            ),
        }
    }
}

impl ConditionQuery {
    pub fn new(industry: &str, location: &str, salary_min: &str, culture: &str) -> Self {
        Self {
            industry: industry.to_string(),
            location: location.to_string(),
            salary_min: salary_min.to_string(),
            culture: culture.to_string(),
        }
    }

    /// Replace a single field, leaving the siblings untouched
    pub fn update(&mut self, field: ConditionField, value: &str) {
        let slot = match field {
            ConditionField::Industry => &mut self.industry,
            ConditionField::Location => &mut self.location,
            ConditionField::SalaryMin => &mut self.salary_min,
            ConditionField::Culture => &mut self.culture,
        };
        *slot = value.to_string();
    }

    /// Consuming variant of [`ConditionQuery::update`]
    pub fn with(mut self, field: ConditionField, value: &str) -> Self {
        self.update(field, value);
        self
    }

    pub fn get(&self, field: ConditionField) -> &str {
        match field {
            ConditionField::Industry => &self.industry,
            ConditionField::Location => &self.location,
            ConditionField::SalaryMin => &self.salary_min,
            ConditionField::Culture => &self.culture,
        }
    }
}

/// Minimum salary as sent to the backend.
///
/// Free text is parsed explicitly at the request boundary. Anything that does
/// not read as a finite number (including the empty string) becomes
/// [`SalaryMin::Invalid`], the not-a-number sentinel, which is still sent and
/// goes over the wire as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryMin {
    Parsed(f64),
    Invalid,
}

impl SalaryMin {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SalaryMin::Invalid;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => SalaryMin::Parsed(value),
            _ => SalaryMin::Invalid,
        }
    }
}

impl Serialize for SalaryMin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            // Whole numbers go out as integers so `500` stays `500`, not `500.0`
            SalaryMin::Parsed(value)
                if value.fract() == 0.0 && value.abs() < i64::MAX as f64 =>
            {
                serializer.serialize_i64(*value as i64)
            }
            SalaryMin::Parsed(value) => serializer.serialize_f64(*value),
            SalaryMin::Invalid => serializer.serialize_none(),
        }
    }
}
