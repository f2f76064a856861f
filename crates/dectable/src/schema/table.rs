//! Table-level model.

use serde::{Deserialize, Serialize};

use crate::error::{DectableError, Result};
use crate::id::new_table_id;
use crate::validation;

use super::column::{Input, Output};
use super::rule::Rule;

/// A decision table: metadata, input columns, output columns and rule rows.
///
/// Rectangularity is not enforced by construction. Structural edits keep it,
/// and the validator reports it when it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Stable identifier, also the stored file name.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Business rule the table implements.
    #[serde(default)]
    pub business_rule: String,
    /// Event that triggers evaluation.
    #[serde(default)]
    pub trigger: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub rules: Vec<Rule>,
}

/// Counts and labels for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub id: String,
    pub name: String,
    pub input_labels: Vec<String>,
    pub output_labels: Vec<String>,
    pub rule_count: usize,
}

impl Table {
    /// Create an empty table with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Start a new table: generated id, one input, one output, one rule.
    pub fn draft() -> Self {
        Self::draft_with_id(new_table_id())
    }

    /// Start a new table with a caller-supplied id.
    pub fn draft_with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: vec![Input::new("input1", "Input 1")],
            outputs: vec![Output::new("output1", "Output 1")],
            rules: vec![Rule::blank("rule1", 1, 1)],
            ..Self::default()
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if every rule has one entry per column.
    pub fn is_rectangular(&self) -> bool {
        self.rules
            .iter()
            .all(|r| r.is_rectangular(self.inputs.len(), self.outputs.len()))
    }

    /// Succeed only if the validator reports nothing.
    pub fn ensure_valid(&self) -> Result<()> {
        let messages = validation::validate(self);
        if messages.is_empty() {
            Ok(())
        } else {
            Err(DectableError::ValidationFailure(messages))
        }
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            input_labels: self.inputs.iter().map(|i| i.label.clone()).collect(),
            output_labels: self.outputs.iter().map(|o| o.label.clone()).collect(),
            rule_count: self.rules.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::is_table_id;

    #[test]
    fn test_draft_is_prepopulated() {
        let table = Table::draft();

        assert!(is_table_id(&table.id));
        assert_eq!(table.inputs.len(), 1);
        assert_eq!(table.outputs.len(), 1);
        assert_eq!(table.rules.len(), 1);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_draft_needs_name_and_expression() {
        let table = Table::draft();

        match table.ensure_valid() {
            Err(DectableError::ValidationFailure(messages)) => assert_eq!(messages.len(), 2),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_summary() {
        let summary = Table::draft_with_id("DAK.DT.X").with_name("Triage").summary();

        assert_eq!(summary.name, "Triage");
        assert_eq!(summary.input_labels, vec!["Input 1"]);
        assert_eq!(summary.rule_count, 1);
    }
}
