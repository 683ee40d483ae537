//! Bulk mutation handler
//!
//! Shared flow for delete / verify / unverify commands:
//! dry-run preview, optional confirmation, concurrent execution, and a
//! per-id report. The command fails if any id failed.

use std::future::Future;
use std::sync::Arc;

use colored::Colorize;
use dialoguer::Confirm;
use serde_json::json;

use crate::cli::{BulkArgs, OutputFormat};
use crate::client::models::Payload;
use crate::client::parallel::DEFAULT_MAX_CONCURRENT;
use crate::client::{IdOutcome, for_each_id};
use crate::error::{ApiError, Error, Result};
use crate::models::display::OutcomeDisplay;
use crate::output::{self, json::JsonOutput};

/// Describes a bulk mutation for prompts and messages
#[derive(Debug, Clone, Copy)]
pub struct BulkAction {
    /// Verb in the imperative, e.g. `delete`
    pub verb: &'static str,
    /// Account kind, e.g. `recruiter`
    pub noun: &'static str,
    /// Whether to ask for confirmation before running
    pub destructive: bool,
}

/// Run `op` for every id given on the command line.
///
/// `yes` skips the confirmation prompt for destructive actions.
pub async fn run_bulk<C, F, Fut>(
    client: Arc<C>,
    args: &BulkArgs,
    yes: bool,
    action: BulkAction,
    format: OutputFormat,
    op: F,
) -> Result<()>
where
    C: ?Sized,
    F: Fn(Arc<C>, String) -> Fut,
    Fut: Future<Output = Result<Payload>>,
{
    let ids = args.unique_ids();

    if args.dry_run {
        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
        eprintln!();
        for id in &ids {
            eprintln!("Would {} {} {}", action.verb, action.noun, id);
        }
        return Ok(());
    }

    if action.destructive && !yes && !confirm(&action, ids.len())? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let outcomes = execute(client, ids, op).await;
    report(&outcomes, &action, format)?;
    summarize(&outcomes, &action)
}

fn confirm(action: &BulkAction, count: usize) -> Result<bool> {
    eprintln!(
        "{} {} {} {}(s)? This cannot be undone.",
        "⚠".yellow(),
        capitalize(action.verb),
        count,
        action.noun
    );

    Ok(Confirm::new()
        .with_prompt("Confirm?")
        .default(false)
        .interact()?)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run the operation concurrently and return outcomes in input order
pub async fn execute<C, F, Fut>(client: Arc<C>, ids: Vec<String>, op: F) -> Vec<IdOutcome<Payload>>
where
    C: ?Sized,
    F: Fn(Arc<C>, String) -> Fut,
    Fut: Future<Output = Result<Payload>>,
{
    let order = ids.clone();
    let mut outcomes = for_each_id(ids, |id| op(client.clone(), id), DEFAULT_MAX_CONCURRENT).await;
    outcomes.sort_by_key(|o| order.iter().position(|id| *id == o.id));
    outcomes
}

fn report(outcomes: &[IdOutcome<Payload>], action: &BulkAction, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let data: Vec<_> = outcomes
                .iter()
                .map(|o| match &o.result {
                    Ok(payload) => json!({ "id": o.id, "ok": true, "response": payload }),
                    Err(err) => json!({ "id": o.id, "ok": false, "error": err.to_string() }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&JsonOutput::new(data))?);
        }
        _ => {
            let rows: Vec<OutcomeDisplay> = outcomes.iter().map(OutcomeDisplay::from).collect();
            let heading = format!("{} {}", capitalize(action.verb), action.noun);
            output::print_rows(&rows, &(), &heading, format)?;
        }
    }
    Ok(())
}

/// Turn per-id outcomes into the command result.
///
/// An expired session takes priority so the caller gets the re-login hint.
pub fn summarize(outcomes: &[IdOutcome<Payload>], action: &BulkAction) -> Result<()> {
    let failed: Vec<&IdOutcome<Payload>> = outcomes.iter().filter(|o| !o.is_ok()).collect();
    if failed.is_empty() {
        return Ok(());
    }

    if failed
        .iter()
        .any(|o| matches!(&o.result, Err(e) if e.is_auth_expired()))
    {
        return Err(ApiError::AuthExpired.into());
    }

    Err(Error::Other(format!(
        "{} of {} {} operations failed",
        failed.len(),
        outcomes.len(),
        action.verb
    )))
}
