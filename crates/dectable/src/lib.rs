//! dectable: clinical decision tables and their DMN serialization.
//!
//! A decision table maps combinations of input conditions to output
//! conclusions, one rule per row. This crate holds the in-memory model, reads
//! and writes the DMN decision-table subset, validates structure, and edits
//! columns and rows without breaking the rule matrix.
//!
//! # Core Principles
//!
//! - **Text in, text out**: the codec works on document strings; storage is
//!   the caller's business
//! - **Positional**: entries line up with columns by index, not by id
//! - **Lenient on content, strict on shape**: missing optional parts decode
//!   to defaults, a missing `decisionTable` does not decode at all
//!
//! # Example
//!
//! ```
//! use dectable::{decode, edit, encode, validate, Table};
//!
//! let mut table = Table::draft_with_id("DAK.DT.EXAMPLE").with_name("Danger signs");
//! table.inputs[0].expression = "Patient.convulsing".to_string();
//! let table = edit::add_output(&table);
//!
//! assert!(validate(&table).is_empty());
//! assert_eq!(decode(&encode(&table)).unwrap(), table);
//! ```

pub mod codec;
pub mod edit;
pub mod error;
pub mod id;
pub mod schema;
pub mod session;
pub mod store;
pub mod validation;

pub use codec::{EncoderOptions, decode, encode, encode_with, escape, unescape};
pub use edit::EditOperation;
pub use error::{DecodeError, DectableError, Result};
pub use id::{is_table_id, new_table_id};
pub use schema::{Input, Output, Rule, Table, TableSummary, TypeRef};
pub use session::{EditSession, SaveMode};
pub use store::{SaveReceipt, StoreConfig, TableStore};
pub use validation::{ValidationKind, ValidationMessage, validate};
