//! Input and output column definitions.

use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// An input (condition) column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Input {
    /// Identifier, unique among the table's inputs.
    pub id: String,
    /// Column heading.
    pub label: String,
    /// Logic or source path evaluated for this column.
    pub expression: String,
    /// Data type of the expression.
    #[serde(default)]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub description: String,
}

impl Input {
    /// Create an input with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the expression.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    /// Set the type.
    pub fn with_type_ref(mut self, type_ref: TypeRef) -> Self {
        self.type_ref = type_ref;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An output (conclusion) column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Output {
    /// Identifier, unique among the table's outputs.
    pub id: String,
    /// Column heading.
    pub label: String,
    /// Data type of the conclusion.
    #[serde(default)]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub description: String,
}

impl Output {
    /// Create an output with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the type.
    pub fn with_type_ref(mut self, type_ref: TypeRef) -> Self {
        self.type_ref = type_ref;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
