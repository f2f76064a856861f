//! Show command - print a decision table.

use colored::Colorize;
use dectable::{Table, TableStore};

use super::{CommandResult, resolve};

pub fn run(store: &TableStore, target: &str, json: bool) -> CommandResult {
    let path = resolve(store, target)?;
    let table = TableStore::load_path(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    print_table(&table);
    Ok(())
}

fn print_table(table: &Table) {
    println!("{} {}", table.name.white().bold(), format!("[{}]", table.id).dimmed());
    if !table.description.is_empty() {
        println!("  {}", table.description);
    }
    if !table.business_rule.is_empty() {
        println!("  {} {}", "Business rule:".dimmed(), table.business_rule);
    }
    if !table.trigger.is_empty() {
        println!("  {} {}", "Trigger:".dimmed(), table.trigger);
    }
    println!();

    println!("{}", "Inputs:".cyan().bold());
    for (i, input) in table.inputs.iter().enumerate() {
        println!(
            "  {:>2}. {:24} {:10} {}",
            i,
            input.label,
            input.type_ref.as_str(),
            input.expression.dimmed()
        );
    }

    println!("{}", "Outputs:".cyan().bold());
    for (i, output) in table.outputs.iter().enumerate() {
        println!("  {:>2}. {:24} {}", i, output.label, output.type_ref.as_str());
    }

    println!("{}", "Rules:".cyan().bold());
    for (i, rule) in table.rules.iter().enumerate() {
        println!(
            "  {:>2}. {} => {}",
            i,
            rule.input_entries.join(" | "),
            rule.output_entries.join(" | ").green()
        );
        if !rule.description.is_empty() {
            println!("      {}", rule.description.dimmed());
        }
    }
}
