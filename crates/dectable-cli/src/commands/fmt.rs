//! Fmt command - rewrite a table in canonical form.

use std::fs;

use colored::Colorize;
use dectable::{DecodeError, TableStore, decode, encode_with};

use super::{CommandResult, resolve};

pub fn run(store: &TableStore, target: &str, check: bool) -> CommandResult {
    let path = resolve(store, target)?;
    let original = fs::read_to_string(&path)?;
    let canonical = canonical_form(store, &original)?;

    if canonical == original {
        println!(
            "{} {}",
            "Canonical".green().bold(),
            path.display().to_string().white()
        );
        return Ok(());
    }

    if check {
        return Err(format!("{} is not in canonical form", path.display()).into());
    }

    fs::write(&path, canonical)?;
    println!(
        "{} {}",
        "Formatted".green().bold(),
        path.display().to_string().white()
    );
    Ok(())
}

/// The document as the store would write it.
fn canonical_form(store: &TableStore, document: &str) -> Result<String, DecodeError> {
    Ok(encode_with(&decode(document)?, &store.config().encoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dectable::{EncoderOptions, SaveMode, StoreConfig, Table};
    use tempfile::TempDir;

    #[test]
    fn test_canonical_form_follows_store_encoder() {
        let dir = TempDir::new().unwrap();
        let store = TableStore::with_config(StoreConfig {
            root: dir.path().to_path_buf(),
            encoder: EncoderOptions { indent: 4 },
            ..StoreConfig::default()
        });
        let mut table = Table::draft_with_id("DAK.DT.FMT").with_name("Fever");
        table.inputs[0].expression = "Observation.temperature".to_string();
        let receipt = store.save(&table, SaveMode::Create).unwrap();

        let stored = fs::read_to_string(&receipt.path).unwrap();
        assert_eq!(canonical_form(&store, &stored).unwrap(), stored);

        let default_store = TableStore::new(dir.path());
        assert_ne!(canonical_form(&default_store, &stored).unwrap(), stored);
    }
}
