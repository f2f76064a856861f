//! Structural editing of decision tables.

mod editor;
mod operations;

pub use editor::{add_input, add_output, add_rule, apply, remove_input, remove_output, remove_rule};
pub use operations::EditOperation;
