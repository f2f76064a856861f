//! Edit command - apply structural operations and save.

use colored::Colorize;
use dectable::{EditOperation, EditSession, SaveMode, TableStore};
use tracing::info;

use super::{CommandResult, resolve, write_back};

pub fn run(
    store: &TableStore,
    target: &str,
    ops: Vec<EditOperation>,
    no_validate: bool,
) -> CommandResult {
    let path = resolve(store, target)?;
    let table = TableStore::load_path(&path)?;
    let mut session = EditSession::from_table(table, SaveMode::Update);

    println!(
        "{} {}",
        "Editing".cyan().bold(),
        path.display().to_string().white()
    );

    for op in ops {
        session.apply(op)?;
        info!(op = %op, "applied");
        println!("  {} {}", "+".green(), op.description());
    }

    let table = session.into_table();
    write_back(store, &path, &table, !no_validate)
}
