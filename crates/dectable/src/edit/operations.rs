//! Structural edit operations that can be applied to a table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DectableError;

/// A structural edit. Indexes are 0-based positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "index", rename_all = "snake_case")]
pub enum EditOperation {
    AddInput,
    RemoveInput(usize),
    AddOutput,
    RemoveOutput(usize),
    AddRule,
    RemoveRule(usize),
}

impl EditOperation {
    /// Get a human-readable description of the operation.
    pub fn description(&self) -> String {
        match self {
            EditOperation::AddInput => "Add input column".to_string(),
            EditOperation::RemoveInput(i) => format!("Remove input column {}", i + 1),
            EditOperation::AddOutput => "Add output column".to_string(),
            EditOperation::RemoveOutput(i) => format!("Remove output column {}", i + 1),
            EditOperation::AddRule => "Add rule".to_string(),
            EditOperation::RemoveRule(i) => format!("Remove rule {}", i + 1),
        }
    }
}

/// Text form: `add-input`, `remove-input:<index>`, and so on.
impl FromStr for EditOperation {
    type Err = DectableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, index) = match s.split_once(':') {
            Some((name, index)) => {
                let index = index.trim().parse::<usize>().map_err(|_| {
                    DectableError::InvalidOperation(format!("'{}': index must be a number", s))
                })?;
                (name.trim(), Some(index))
            }
            None => (s.trim(), None),
        };

        let op = match (name, index) {
            ("add-input", None) => EditOperation::AddInput,
            ("add-output", None) => EditOperation::AddOutput,
            ("add-rule", None) => EditOperation::AddRule,
            ("remove-input", Some(i)) => EditOperation::RemoveInput(i),
            ("remove-output", Some(i)) => EditOperation::RemoveOutput(i),
            ("remove-rule", Some(i)) => EditOperation::RemoveRule(i),
            ("remove-input" | "remove-output" | "remove-rule", None) => {
                return Err(DectableError::InvalidOperation(format!(
                    "'{}' needs an index, e.g. {}:0",
                    s, name
                )));
            }
            _ => {
                return Err(DectableError::InvalidOperation(format!(
                    "unknown operation '{}'",
                    s
                )));
            }
        };

        Ok(op)
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOperation::AddInput => write!(f, "add-input"),
            EditOperation::RemoveInput(i) => write!(f, "remove-input:{}", i),
            EditOperation::AddOutput => write!(f, "add-output"),
            EditOperation::RemoveOutput(i) => write!(f, "remove-output:{}", i),
            EditOperation::AddRule => write!(f, "add-rule"),
            EditOperation::RemoveRule(i) => write!(f, "remove-rule:{}", i),
        }
    }
}
