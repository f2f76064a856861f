//! Structural validation of decision tables.

mod message;
mod validators;

pub use message::{ValidationKind, ValidationMessage};
pub use validators::{
    CardinalityValidator, ColumnValidator, DuplicateIdValidator, MetadataValidator,
    RuleShapeValidator, ValidationEngine, Validator, validate,
};
