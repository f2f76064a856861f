//! Core type definitions for the decision table model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Data type of an input or output column (`typeRef` in DMN).
///
/// Decoding is permissive: any literal found in a document is kept as
/// [`TypeRef::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeRef {
    /// Free text.
    String,
    /// Whole numbers.
    Integer,
    /// true/false.
    Boolean,
    /// Calendar date.
    Date,
    /// Time span.
    Duration,
    /// Any other literal carried through from a document.
    Other(String),
}

impl TypeRef {
    /// The values an editing surface offers.
    pub const EDITABLE: [TypeRef; 5] = [
        TypeRef::String,
        TypeRef::Integer,
        TypeRef::Boolean,
        TypeRef::Date,
        TypeRef::Duration,
    ];

    /// The literal written to the `typeRef` attribute.
    pub fn as_str(&self) -> &str {
        match self {
            TypeRef::String => "string",
            TypeRef::Integer => "integer",
            TypeRef::Boolean => "boolean",
            TypeRef::Date => "date",
            TypeRef::Duration => "duration",
            TypeRef::Other(literal) => literal,
        }
    }

    /// Returns true if this is one of the five editable types.
    pub fn is_editable(&self) -> bool {
        !matches!(self, TypeRef::Other(_))
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::String
    }
}

impl From<&str> for TypeRef {
    fn from(literal: &str) -> Self {
        match literal {
            "string" => TypeRef::String,
            "integer" => TypeRef::Integer,
            "boolean" => TypeRef::Boolean,
            "date" => TypeRef::Date,
            "duration" => TypeRef::Duration,
            other => TypeRef::Other(other.to_string()),
        }
    }
}

impl From<String> for TypeRef {
    fn from(literal: String) -> Self {
        match TypeRef::from(literal.as_str()) {
            TypeRef::Other(_) => TypeRef::Other(literal),
            known => known,
        }
    }
}

impl From<TypeRef> for String {
    fn from(type_ref: TypeRef) -> Self {
        match type_ref {
            TypeRef::Other(literal) => literal,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TypeRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeRef::from(s))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_literals() {
        for type_ref in TypeRef::EDITABLE {
            assert_eq!(TypeRef::from(type_ref.as_str()), type_ref);
            assert!(type_ref.is_editable());
        }
    }

    #[test]
    fn test_unknown_literal_passes_through() {
        let type_ref = TypeRef::from("number");
        assert_eq!(type_ref, TypeRef::Other("number".to_string()));
        assert_eq!(type_ref.to_string(), "number");
        assert!(!type_ref.is_editable());
    }

    #[test]
    fn test_serializes_as_literal() {
        let json = serde_json::to_string(&TypeRef::Duration).unwrap();
        assert_eq!(json, "\"duration\"");

        let parsed: TypeRef = serde_json::from_str("\"tDateTime\"").unwrap();
        assert_eq!(parsed, TypeRef::Other("tDateTime".to_string()));
    }
}
