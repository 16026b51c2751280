// src/orchestrator.rs
//! Query orchestration: owns both search forms, issues requests and tracks
//! the lifecycle of the most recent one.
//!
//! A search started while another is still pending replaces it: the older
//! task is aborted and its outcome can no longer reach the state.

use std::fmt;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::SearchBackend;
use crate::error::SearchError;
use crate::types::{
    CompanyRequest, ConditionField, ConditionQuery, ConditionRequest, NameQuery, SearchResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded(SearchResponse),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&SearchResponse> {
        match self {
            RequestState::Succeeded(response) => Some(response),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Name,
    Condition,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Name => f.write_str("name"),
            SearchMode::Condition => f.write_str("condition"),
        }
    }
}

type Outcome = Result<SearchResponse, SearchError>;

struct InFlight {
    generation: u64,
    mode: SearchMode,
    handle: JoinHandle<Outcome>,
}

pub struct Orchestrator {
    backend: Arc<dyn SearchBackend>,
    name_query: NameQuery,
    condition: ConditionQuery,
    state: RequestState,
    generation: u64,
    last_mode: Option<SearchMode>,
    in_flight: Option<InFlight>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            name_query: NameQuery::default(),
            condition: ConditionQuery::default(),
            state: RequestState::Idle,
            generation: 0,
            last_mode: None,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn name_query(&self) -> &NameQuery {
        &self.name_query
    }

    pub fn condition(&self) -> &ConditionQuery {
        &self.condition
    }

    /// Mode of the search the current state belongs to
    pub fn last_mode(&self) -> Option<SearchMode> {
        self.last_mode
    }

    /// Number of searches started so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_company_name(&mut self, company_name: &str) {
        self.name_query.company_name = company_name.to_string();
    }

    pub fn update_condition(&mut self, field: ConditionField, value: &str) {
        self.condition.update(field, value);
    }

    pub fn set_condition(&mut self, condition: ConditionQuery) {
        self.condition = condition;
    }

    /// Start a name search with the current form input. Returns immediately
    /// with the state set to `Loading`.
    pub fn submit_by_name(&mut self) -> &RequestState {
        let request = CompanyRequest::from(&self.name_query);
        let backend = Arc::clone(&self.backend);
        self.start(SearchMode::Name, async move {
            backend.search_company(&request).await
        })
    }

    /// Start a condition search with the current form input
    pub fn submit_by_condition(&mut self) -> &RequestState {
        let request = ConditionRequest::from(&self.condition);
        let backend = Arc::clone(&self.backend);
        self.start(SearchMode::Condition, async move {
            backend.search_by_condition(&request).await
        })
    }

    fn start<F>(&mut self, mode: SearchMode, search: F) -> &RequestState
    where
        F: std::future::Future<Output = Outcome> + Send + 'static,
    {
        if let Some(previous) = self.in_flight.take() {
            debug!(
                generation = previous.generation,
                mode = %previous.mode,
                "Replacing pending search"
            );
            previous.handle.abort();
        }

        self.generation += 1;
        self.last_mode = Some(mode);
        self.state = RequestState::Loading;
        info!(generation = self.generation, %mode, "Search started");

        self.in_flight = Some(InFlight {
            generation: self.generation,
            mode,
            handle: tokio::spawn(search),
        });
        &self.state
    }

    /// Wait for the pending search, if any, and return the settled state.
    ///
    /// Dropping this future before it resolves leaves the search pending.
    pub async fn wait(&mut self) -> &RequestState {
        if let Some(in_flight) = self.in_flight.as_mut() {
            let joined = (&mut in_flight.handle).await;
            let generation = in_flight.generation;
            self.in_flight = None;

            let outcome = joined.unwrap_or_else(|e| {
                Err(SearchError::Transport(format!("search task ended: {}", e)))
            });
            self.settle(generation, outcome);
        }
        &self.state
    }

    /// Apply the pending search's outcome if it has already finished
    pub async fn poll(&mut self) -> &RequestState {
        let finished = self
            .in_flight
            .as_ref()
            .map(|in_flight| in_flight.handle.is_finished())
            .unwrap_or(false);
        if finished {
            return self.wait().await;
        }
        &self.state
    }

    fn settle(&mut self, generation: u64, outcome: Outcome) {
        self.state = match outcome {
            Ok(response) => {
                info!(generation, results = response.len(), "Search succeeded");
                RequestState::Succeeded(response)
            }
            Err(e) => {
                warn!(generation, kind = e.kind(), error = %e, "Search failed");
                RequestState::Failed(e.user_message())
            }
        };
    }

    /// Name search with `name` as input, awaited to completion
    pub async fn search_by_name(&mut self, name: &str) -> &RequestState {
        self.set_company_name(name);
        self.submit_by_name();
        self.wait().await
    }

    /// Condition search with `condition` as input, awaited to completion
    pub async fn search_by_condition(&mut self, condition: ConditionQuery) -> &RequestState {
        self.set_condition(condition);
        self.submit_by_condition();
        self.wait().await
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}
