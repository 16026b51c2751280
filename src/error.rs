use thiserror::Error;

/// Why a search request failed. The orchestrator collapses all of these into
/// one `Failed` state; the variants exist for logging.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(String),

    /// `detail` is the backend's own message, `body` the raw response text
    #[error("backend returned status {status}: {body}")]
    Status {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport",
            SearchError::Status { .. } => "status",
            SearchError::Decode(_) => "decode",
        }
    }

    /// Message shown to the user in the `Failed` state
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => format!("search failed: {}", detail.trim()),
            _ => "search failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_never_empty() {
        let errors = [
            SearchError::Transport("connection refused".into()),
            SearchError::Status {
                status: 500,
                detail: None,
                body: String::new(),
            },
            SearchError::Status {
                status: 500,
                detail: Some("  ".into()),
                body: String::new(),
            },
            SearchError::Decode("expected value".into()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_status_detail_reaches_user() {
        let err = SearchError::Status {
            status: 404,
            detail: Some("No companies found".into()),
            body: r#"{"detail": "No companies found"}"#.into(),
        };
        assert_eq!(err.user_message(), "search failed: No companies found");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_raw_body_stays_out_of_user_message() {
        let err = SearchError::Status {
            status: 502,
            detail: None,
            body: "<html><body>Bad Gateway</body></html>".into(),
        };
        assert_eq!(err.user_message(), "search failed");
        assert!(err.to_string().contains("Bad Gateway"));
    }
}
