//! Rule rows.

use serde::{Deserialize, Serialize};

/// One row of the rule matrix.
///
/// Entries are aligned with the table's columns by position: `input_entries[i]`
/// belongs to `inputs[i]`, `output_entries[j]` to `outputs[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// One condition per input column.
    #[serde(default)]
    pub input_entries: Vec<String>,
    /// One conclusion per output column.
    #[serde(default)]
    pub output_entries: Vec<String>,
    /// Annotation slots, sized like `output_entries`. Slot 0 is the one
    /// normally shown for editing.
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl Rule {
    /// Create a rule with empty entries for the given column counts.
    pub fn blank(id: impl Into<String>, inputs: usize, outputs: usize) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            input_entries: vec![String::new(); inputs],
            output_entries: vec![String::new(); outputs],
            annotations: vec![String::new(); outputs],
        }
    }

    /// The annotation shown for editing, if any.
    pub fn annotation(&self) -> Option<&str> {
        self.annotations.first().map(String::as_str)
    }

    /// Check the row against the table's column counts.
    pub fn is_rectangular(&self, inputs: usize, outputs: usize) -> bool {
        self.input_entries.len() == inputs && self.output_entries.len() == outputs
    }
}
