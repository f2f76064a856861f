//! Edit session: the single table instance a caller is working on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{decode, encode};
use crate::edit::{self, EditOperation};
use crate::error::Result;
use crate::schema::Table;
use crate::validation::{self, ValidationMessage};

/// Whether persisting creates a new stored table or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    Create,
    Update,
}

impl SaveMode {
    /// Commit message used by the storage collaborator.
    pub fn commit_message(&self, name: &str) -> String {
        match self {
            SaveMode::Create => format!("Add new decision table: {}", name),
            SaveMode::Update => format!("Update decision table: {}", name),
        }
    }
}

/// Owns the table being edited and tracks unsaved changes.
#[derive(Debug, Clone)]
pub struct EditSession {
    table: Table,
    mode: SaveMode,
    dirty: bool,
    applied: Vec<EditOperation>,
}

impl EditSession {
    /// Start a new table from the pre-populated draft.
    pub fn create() -> Self {
        Self::from_table(Table::draft(), SaveMode::Create)
    }

    /// Open an existing document for editing.
    pub fn open(document: &str) -> Result<Self> {
        let table = decode(document)?;
        debug!(id = %table.id, rules = table.rules.len(), "opened decision table");
        Ok(Self::from_table(table, SaveMode::Update))
    }

    pub fn from_table(table: Table, mode: SaveMode) -> Self {
        Self {
            table,
            mode,
            dirty: false,
            applied: Vec::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Direct field edits. Marks the session dirty.
    pub fn table_mut(&mut self) -> &mut Table {
        self.dirty = true;
        &mut self.table
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Operations applied since the session started, in order.
    pub fn applied(&self) -> &[EditOperation] {
        &self.applied
    }

    /// Apply a structural edit. On error the table is left unchanged.
    pub fn apply(&mut self, op: EditOperation) -> Result<()> {
        self.table = edit::apply(&self.table, op)?;
        self.applied.push(op);
        self.dirty = true;
        debug!(op = %op, "applied edit");
        Ok(())
    }

    pub fn validate(&self) -> Vec<ValidationMessage> {
        validation::validate(&self.table)
    }

    pub fn encode(&self) -> String {
        encode(&self.table)
    }

    /// Record a successful save; later saves update the stored table.
    pub fn mark_saved(&mut self) {
        self.mode = SaveMode::Update;
        self.dirty = false;
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}
