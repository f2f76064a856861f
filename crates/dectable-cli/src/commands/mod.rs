//! CLI command implementations.

pub mod edit;
pub mod fmt;
pub mod list;
pub mod new;
pub mod show;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use dectable::{SaveMode, StoreConfig, Table, TableStore, ValidationMessage, encode_with};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// A file path if one exists, otherwise a table id in the store.
pub fn resolve(store: &TableStore, target: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = PathBuf::from(target);
    if path.is_file() {
        return Ok(path);
    }

    let stored = store.path_for(target)?;
    if stored.is_file() {
        Ok(stored)
    } else {
        Err(format!(
            "No DMN file or stored table named '{}'\nLooked in: {}",
            target,
            stored.display()
        )
        .into())
    }
}

/// Write an edited table back to where it came from.
///
/// Tables read from the store go through it so the commit message and digest
/// are reported; other files are overwritten in place.
pub fn write_back(store: &TableStore, path: &Path, table: &Table, validate: bool) -> CommandResult {
    let store = TableStore::with_config(StoreConfig {
        validate_on_save: validate,
        ..store.config().clone()
    });

    let in_store = store
        .path_for(&table.id)
        .ok()
        .and_then(|p| fs::canonicalize(p).ok())
        .zip(fs::canonicalize(path).ok())
        .map(|(stored, given)| stored == given)
        .unwrap_or(false);

    if in_store {
        let receipt = store.save(table, SaveMode::Update)?;
        if receipt.unchanged {
            println!("{}", "No changes to save.".yellow());
        } else {
            println!(
                "{} {}",
                "Saved".green().bold(),
                receipt.path.display().to_string().white()
            );
            println!("Commit message: {}", receipt.commit_message.cyan());
        }
    } else {
        if validate {
            table.ensure_valid()?;
        }
        fs::write(path, encode_with(table, &store.config().encoder))?;
        println!(
            "{} {}",
            "Saved".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

/// Print validation messages as a numbered list.
pub fn print_messages(messages: &[ValidationMessage]) {
    for (i, message) in messages.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            format!("[{}]", message.kind.label()).red(),
            message
        );
    }
}
