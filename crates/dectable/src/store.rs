//! Local-filesystem store for DMN documents.
//!
//! Tables live at `<root>/input/dmn/<id>.dmn`, one file per table.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::codec::{EncoderOptions, decode, encode_with};
use crate::error::{DectableError, Result};
use crate::schema::Table;
use crate::session::SaveMode;

/// Directory, relative to the repository root, holding DMN files.
pub const DMN_DIR: &str = "input/dmn";

/// File extension of stored tables.
pub const DMN_EXTENSION: &str = "dmn";

/// Content digest of a document, `sha256:<hex>`.
pub fn digest(document: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Repository root.
    pub root: PathBuf,
    /// DMN directory relative to `root`.
    pub dmn_dir: PathBuf,
    /// Refuse to save tables with validation messages.
    pub validate_on_save: bool,
    pub encoder: EncoderOptions,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dmn_dir: PathBuf::from(DMN_DIR),
            validate_on_save: true,
            encoder: EncoderOptions::default(),
        }
    }
}

/// What a save did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub path: PathBuf,
    pub commit_message: String,
    pub digest: String,
    /// The stored document already had identical content; nothing was written.
    pub unchanged: bool,
}

/// Reads and writes tables under a repository root.
pub struct TableStore {
    config: StoreConfig,
}

impl TableStore {
    /// Create a store rooted at `root` with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(StoreConfig {
            root: root.into(),
            ..StoreConfig::default()
        })
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn dir(&self) -> PathBuf {
        self.config.root.join(&self.config.dmn_dir)
    }

    /// Absolute location of the document for `id`.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        check_id(id)?;
        Ok(self.dir().join(format!("{}.{}", id, DMN_EXTENSION)))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Encode and write a table.
    ///
    /// `Create` refuses to overwrite an existing document. Identical content
    /// is not rewritten.
    pub fn save(&self, table: &Table, mode: SaveMode) -> Result<SaveReceipt> {
        if self.config.validate_on_save {
            table.ensure_valid()?;
        }

        let path = self.path_for(&table.id)?;
        if mode == SaveMode::Create && path.exists() {
            return Err(DectableError::Persistence(format!(
                "Decision table '{}' already exists at '{}'",
                table.id,
                path.display()
            )));
        }

        let document = encode_with(table, &self.config.encoder);
        let new_digest = digest(&document);
        let commit_message = mode.commit_message(&table.name);

        let unchanged = match fs::read_to_string(&path) {
            Ok(existing) => digest(&existing) == new_digest,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                return Err(DectableError::Io {
                    path: path.clone(),
                    source: e,
                });
            }
        };

        if unchanged {
            debug!(path = %path.display(), "document unchanged, skipping write");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| DectableError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            fs::write(&path, &document).map_err(|e| DectableError::Io {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path.display(), digest = %new_digest, "{}", commit_message);
        }

        Ok(SaveReceipt {
            path,
            commit_message,
            digest: new_digest,
            unchanged,
        })
    }

    /// Load the table stored under `id`.
    pub fn load(&self, id: &str) -> Result<Table> {
        let path = self.path_for(id)?;
        Self::load_path(&path)
    }

    /// Load a table from any DMN file.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|e| DectableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = document.len(), "loaded document");
        Ok(decode(&document)?)
    }

    /// Ids of all stored tables, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let dir = self.dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| DectableError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| DectableError::Io {
                    path: dir.clone(),
                    source: e,
                })?
                .path();
            if path.extension().map(|e| e == DMN_EXTENSION).unwrap_or(false) {
                if let Some(stem) = path.file_stem() {
                    ids.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }
}

/// Ids become file names; keep them to a single path component.
fn check_id(id: &str) -> Result<()> {
    let invalid = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);

    if invalid {
        return Err(DectableError::Persistence(format!(
            "'{}' cannot be used as a decision table file name",
            id
        )));
    }
    Ok(())
}
