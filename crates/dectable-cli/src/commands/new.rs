//! New command - create a draft decision table in the store.

use colored::Colorize;
use dectable::{SaveMode, StoreConfig, Table, TableStore, is_table_id, validate};
use tracing::warn;

use super::{CommandResult, print_messages};

pub fn run(
    store: &TableStore,
    name: String,
    description: Option<String>,
    id: Option<String>,
) -> CommandResult {
    let mut table = match id {
        Some(id) => {
            if !is_table_id(&id) {
                warn!(id = %id, "table id does not follow the DAK.DT.* convention");
            }
            Table::draft_with_id(id)
        }
        None => Table::draft(),
    }
    .with_name(name);

    if let Some(description) = description {
        table = table.with_description(description);
    }

    // A draft is incomplete until its input expression is filled in.
    let drafts = TableStore::with_config(StoreConfig {
        validate_on_save: false,
        ..store.config().clone()
    });
    let receipt = drafts.save(&table, SaveMode::Create)?;

    println!(
        "{} {} {}",
        "Created".green().bold(),
        table.id.white().bold(),
        format!("({})", receipt.path.display()).dimmed()
    );
    println!("Commit message: {}", receipt.commit_message.cyan());

    let messages = validate(&table);
    if !messages.is_empty() {
        println!();
        println!("{}", "Still to complete:".yellow().bold());
        print_messages(&messages);
    }

    Ok(())
}
