//! List command - show the tables stored under input/dmn.

use colored::Colorize;
use dectable::{TableStore, TableSummary};
use tracing::warn;

use super::CommandResult;

pub fn run(store: &TableStore, json: bool) -> CommandResult {
    let mut summaries: Vec<TableSummary> = Vec::new();
    for id in store.list()? {
        match store.load(&id) {
            Ok(table) => summaries.push(table.summary()),
            Err(e) => warn!(id = %id, error = %e, "skipping unreadable table"),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No decision tables found.".yellow());
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "{:24} {} {}",
            summary.id.white().bold(),
            summary.name,
            format!(
                "({} inputs, {} outputs, {} rules)",
                summary.input_labels.len(),
                summary.output_labels.len(),
                summary.rule_count
            )
            .dimmed()
        );
    }

    Ok(())
}
