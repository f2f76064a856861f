//! Validate command - report every structural problem in a table.

use colored::Colorize;
use dectable::{TableStore, validate};

use super::{CommandResult, print_messages, resolve};

pub fn run(store: &TableStore, target: &str, json: bool) -> CommandResult {
    let path = resolve(store, target)?;
    let table = TableStore::load_path(&path)?;
    let messages = validate(&table);

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else if messages.is_empty() {
        println!(
            "{} {}",
            "Valid".green().bold(),
            path.display().to_string().white()
        );
    } else {
        println!(
            "{} {} ({} problems)",
            "Invalid".red().bold(),
            path.display().to_string().white(),
            messages.len()
        );
        print_messages(&messages);
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(format!("{} validation problems in {}", messages.len(), table.id).into())
    }
}
