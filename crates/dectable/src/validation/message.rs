//! Validation message types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of structural problem found in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    MissingName,
    MissingId,
    NoInputs,
    NoOutputs,
    NoRules,
    MissingInputLabel,
    MissingInputExpression,
    MissingOutputLabel,
    /// A rule's input entries don't line up with the input columns.
    InputEntryCount,
    /// A rule's output entries don't line up with the output columns.
    OutputEntryCount,
    /// Two columns or rows in the same collection share an id.
    DuplicateId,
}

impl ValidationKind {
    /// Get a human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationKind::MissingName => "Missing Name",
            ValidationKind::MissingId => "Missing ID",
            ValidationKind::NoInputs => "No Inputs",
            ValidationKind::NoOutputs => "No Outputs",
            ValidationKind::NoRules => "No Rules",
            ValidationKind::MissingInputLabel => "Missing Input Label",
            ValidationKind::MissingInputExpression => "Missing Input Expression",
            ValidationKind::MissingOutputLabel => "Missing Output Label",
            ValidationKind::InputEntryCount => "Input Entry Count",
            ValidationKind::OutputEntryCount => "Output Entry Count",
            ValidationKind::DuplicateId => "Duplicate ID",
        }
    }
}

/// One violation, phrased for display to the person editing the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub kind: ValidationKind,
    /// What the message is about: `table`, `input 2`, `rule 3`, ...
    pub subject: String,
    pub message: String,
}

impl ValidationMessage {
    pub fn new(
        kind: ValidationKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
