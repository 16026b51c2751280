// src/form.rs
//! Line-driven session over both search forms. Input stays editable while a
//! search is pending; its result is printed as soon as it settles.

use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::orchestrator::{Orchestrator, SearchMode};
use crate::render::render_state;
use crate::types::ConditionField;

const HELP: &str = "\
commands:
  name <company>          set the company name
  set <field> <value>     set industry, location, salary_min or culture
  show                    print both forms
  search name             search by company name
  search condition        search by conditions
  status                  print the current search state
  wait                    wait for the pending search
  help                    this text
  quit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Name(String),
    Set(ConditionField, String),
    Show,
    Search(SearchMode),
    Status,
    Wait,
    Help,
    Quit,
}

impl FormCommand {
    pub fn parse(line: &str) -> Result<Self> {
        // The company name is sent exactly as typed, so only the command word
        // is split off here
        let line = line.trim_start();
        let (word, raw_rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };
        let rest = raw_rest.trim();

        match word {
            "name" => Ok(FormCommand::Name(raw_rest.to_string())),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    anyhow::bail!("usage: set <field> <value>");
                }
                Ok(FormCommand::Set(field.parse()?, value.to_string()))
            }
            "show" => Ok(FormCommand::Show),
            "search" => match rest {
                "name" => Ok(FormCommand::Search(SearchMode::Name)),
                "condition" => Ok(FormCommand::Search(SearchMode::Condition)),
                _ => anyhow::bail!("usage: search name | search condition"),
            },
            "status" => Ok(FormCommand::Status),
            "wait" => Ok(FormCommand::Wait),
            "help" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" => Ok(FormCommand::Quit),
            other => anyhow::bail!("unknown command: {}. Type help for the command list", other),
        }
    }
}

enum Event {
    Line(std::io::Result<Option<String>>),
    Settled,
}

/// Run the session until `quit` or end of input. A search still pending at
/// that point is awaited and printed first.
pub async fn run_session<R, W>(orchestrator: &mut Orchestrator, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line),
            _ = orchestrator.wait(), if orchestrator.state().is_loading() => Event::Settled,
        };

        let line = match event {
            Event::Settled => {
                writeln!(out, "{}", render_state(orchestrator.state()))?;
                continue;
            }
            Event::Line(line) => line.context("Failed to read input")?,
        };

        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Form command");

        match command {
            FormCommand::Name(name) => orchestrator.set_company_name(&name),
            FormCommand::Set(field, value) => orchestrator.update_condition(field, &value),
            FormCommand::Show => {
                let name = orchestrator.name_query();
                writeln!(out, "company_name: {}", name.company_name)?;
                let condition = orchestrator.condition();
                for field in ConditionField::ALL {
                    writeln!(out, "{}: {}", field, condition.get(field))?;
                }
            }
            FormCommand::Search(mode) => {
                let state = match mode {
                    SearchMode::Name => orchestrator.submit_by_name(),
                    SearchMode::Condition => orchestrator.submit_by_condition(),
                };
                writeln!(out, "{}", render_state(state))?;
            }
            FormCommand::Status => {
                let rendered = render_state(orchestrator.state());
                if rendered.is_empty() {
                    writeln!(out, "idle")?;
                } else {
                    writeln!(out, "{}", rendered)?;
                }
            }
            FormCommand::Wait => {
                if orchestrator.state().is_loading() {
                    let state = orchestrator.wait().await;
                    writeln!(out, "{}", render_state(state))?;
                }
            }
            FormCommand::Help => writeln!(out, "{}", HELP)?,
            FormCommand::Quit => break,
        }
    }

    if orchestrator.state().is_loading() {
        let state = orchestrator.wait().await;
        writeln!(out, "{}", render_state(state))?;
    }
    out.flush()?;
    Ok(())
}
