// src/core/service_client.rs
//! HTTP client for the company search backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::types::{CompanyRequest, ConditionRequest, ErrorDetail, SearchResponse};

pub const SEARCH_COMPANY_ENDPOINT: &str = "/search_company";
pub const SEARCH_BY_CONDITION_ENDPOINT: &str = "/search_by_condition";

/// The two remote search operations. Implemented over HTTP by
/// [`ServiceClient`]; tests substitute scripted backends.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_company(
        &self,
        request: &CompanyRequest,
    ) -> std::result::Result<SearchResponse, SearchError>;

    async fn search_by_condition(
        &self,
        request: &ConditionRequest,
    ) -> std::result::Result<SearchResponse, SearchError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// POST a JSON payload and decode the analysis from the body.
    ///
    /// The body is read as text first so that decode failures are reported
    /// separately from transport failures.
    async fn post_json<T>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> std::result::Result<SearchResponse, SearchError>
    where
        T: serde::Serialize + Sync,
    {
        let url = self.config.endpoint(endpoint);
        let request_id = Uuid::new_v4();

        info!(%request_id, %url, "Calling search backend");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(%request_id, error = %e, "Search request failed to send");
                SearchError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!(%request_id, %status, "Response status");

        let body = response.text().await.map_err(|e| {
            error!(%request_id, error = %e, "Failed to read response body");
            SearchError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorDetail>(&body)
                .ok()
                .and_then(|error_detail| error_detail.message().map(str::to_string));
            warn!(%request_id, %status, ?detail, %body, "Search backend returned error status");
            return Err(SearchError::Status {
                status: status.as_u16(),
                detail,
                body,
            });
        }

        debug!(%request_id, %body, "Raw search response");

        serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            error!(%request_id, error = %e, "Failed to parse search response");
            SearchError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl SearchBackend for ServiceClient {
    async fn search_company(
        &self,
        request: &CompanyRequest,
    ) -> std::result::Result<SearchResponse, SearchError> {
        self.post_json(SEARCH_COMPANY_ENDPOINT, request).await
    }

    async fn search_by_condition(
        &self,
        request: &ConditionRequest,
    ) -> std::result::Result<SearchResponse, SearchError> {
        self.post_json(SEARCH_BY_CONDITION_ENDPOINT, request).await
    }
}
