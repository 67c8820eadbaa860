//! Output formatting helpers.
//!
//! Data goes to stdout as JSON; human-oriented status lines go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rebrick_core::{RecordOutcome, UpdateOutcome};
use rebrick_sync::SyncSummary;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as JSON, pretty-printed on request.
pub fn json_with<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    if pretty { json_pretty(value) } else { json(value) }
}

/// Print the one-line summary of a sync run.
pub fn summary(summary: &SyncSummary) {
    let marker = if summary.updated == summary.total {
        "✓".green()
    } else {
        "!".yellow()
    };
    eprintln!("{} {}", marker, summary);
}

/// Print a record that was not updated.
pub fn failure(outcome: &RecordOutcome) {
    let key = outcome
        .key
        .as_ref()
        .map_or_else(|| "<no key>".to_string(), |k| k.to_string());

    let detail = match &outcome.outcome {
        UpdateOutcome::Updated => return,
        UpdateOutcome::NotFound => "no local row".to_string(),
        UpdateOutcome::Malformed { reason } | UpdateOutcome::Failed { reason } => reason.clone(),
    };

    eprintln!("  {} {}: {}", "✗".red(), key, detail.dimmed());
}
