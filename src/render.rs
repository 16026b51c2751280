// src/render.rs
//! Plain-text rendering of search state for the terminal

use std::fmt::Write;

use crate::orchestrator::RequestState;
use crate::types::{AnalysisField, SearchResponse, SearchResult};

pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => "loading…".to_string(),
        RequestState::Succeeded(response) => render_response(response),
        RequestState::Failed(message) => format!("error: {}", message),
    }
}

pub fn render_response(response: &SearchResponse) -> String {
    if response.is_empty() {
        return "no matching companies".to_string();
    }
    response
        .results()
        .iter()
        .map(render_result)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_result(result: &SearchResult) -> String {
    let mut out = String::new();
    if let Some(company) = &result.company {
        let _ = writeln!(out, "== {} ==", company);
    }
    render_field(&mut out, "Strengths", &result.strengths);
    render_field(&mut out, "Challenges", &result.challenges);
    let _ = writeln!(out, "Motivation");
    render_block(&mut out, &result.motivation);
    out
}

fn render_field(out: &mut String, heading: &str, field: &AnalysisField) {
    let _ = writeln!(out, "{}", heading);
    match field {
        AnalysisField::List(items) => {
            for item in items {
                let _ = writeln!(out, "  - {}", item);
            }
        }
        AnalysisField::Text(text) => render_block(out, text),
    }
}

fn render_block(out: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "    {}", line);
    }
}
