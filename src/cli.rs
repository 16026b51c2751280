// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use crate::core::{ConfigManager, ServiceClient};
use crate::form;
use crate::orchestrator::{Orchestrator, RequestState};
use crate::render::render_state;
use crate::types::ConditionQuery;

#[derive(Parser)]
#[command(name = "shukatsu")]
#[command(about = "Look up companies and get strengths, challenges and a motivation example")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL, overrides config file and SHUKATSU_API_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search a company by name
    Company { name: String },
    /// Search companies matching conditions
    Condition {
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Minimum annual salary; anything non-numeric is sent as null
        #[arg(long, default_value = "")]
        salary_min: String,
        #[arg(long, default_value = "")]
        culture: String,
    },
    /// Interactive session with both search forms
    Form,
}

pub async fn handle_command(cli: Cli) -> Result<ExitCode> {
    let config = ConfigManager::load()?.with_overrides(cli.base_url.as_deref(), cli.timeout_ms)?;
    info!("Using backend: {}", config.client.base_url);

    let backend = Arc::new(ServiceClient::new(config.client)?);
    let mut orchestrator = Orchestrator::new(backend);

    let state = match cli.command {
        Command::Company { name } => orchestrator.search_by_name(&name).await,
        Command::Condition {
            industry,
            location,
            salary_min,
            culture,
        } => {
            let condition = ConditionQuery::new(&industry, &location, &salary_min, &culture);
            orchestrator.search_by_condition(condition).await
        }
        Command::Form => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            form::run_session(&mut orchestrator, stdin, std::io::stdout()).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let rendered = render_state(state);
    match state {
        RequestState::Failed(_) => {
            eprintln!("{}", rendered);
            Ok(ExitCode::FAILURE)
        }
        _ => {
            print!("{}", line_terminated(rendered));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn line_terminated(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
