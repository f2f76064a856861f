//! In-memory decision table model.

mod column;
mod rule;
mod table;
mod types;

pub use column::{Input, Output};
pub use rule::Rule;
pub use table::{Table, TableSummary};
pub use types::TypeRef;
