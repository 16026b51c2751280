use serde::{Deserialize, Serialize};

// ===== Backend Response Types =====

/// A strengths/challenges value. The backend returns either one string or a
/// list of strings and the shape may change from call to call, so both are
/// kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisField {
    Text(String),
    List(Vec<String>),
}

impl AnalysisField {
    pub fn is_list(&self) -> bool {
        matches!(self, AnalysisField::List(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnalysisField::Text(text) => Some(text),
            AnalysisField::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnalysisField::List(items) => Some(items),
            AnalysisField::Text(_) => None,
        }
    }
}

/// Analysis of one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub strengths: AnalysisField,
    pub challenges: AnalysisField,
    pub motivation: String,
}

/// Success body of either endpoint: a bare analysis, or the
/// `{ "results": [...] }` envelope the condition search answers with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Batch { results: Vec<SearchResult> },
    Single(SearchResult),
}

impl SearchResponse {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchResponse::Batch { results } => results,
            SearchResponse::Single(result) => std::slice::from_ref(result),
        }
    }

    pub fn len(&self) -> usize {
        self.results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

/// FastAPI-style error body, `{ "detail": ... }`
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// The detail when it is a plain string; structured details (such as
    /// validation error lists) are not user-facing
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str()
    }
}
