//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use dectable::EditOperation;
use std::path::PathBuf;

/// dectable: edit clinical decision tables stored as DMN
#[derive(Parser)]
#[command(name = "dectable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root holding input/dmn
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new decision table with one input, one output and one rule
    New {
        /// Table name
        #[arg(short, long)]
        name: String,

        /// Question the table answers
        #[arg(short, long)]
        description: Option<String>,

        /// Table id (default: generated DAK.DT.* id)
        #[arg(long)]
        id: Option<String>,
    },

    /// Show a decision table
    Show {
        /// Path to a .dmn file, or a table id under input/dmn
        #[arg(value_name = "FILE_OR_ID")]
        target: String,

        /// Output the full model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report every structural problem in a decision table
    Validate {
        /// Path to a .dmn file, or a table id under input/dmn
        #[arg(value_name = "FILE_OR_ID")]
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or remove columns and rules
    Edit {
        /// Path to a .dmn file, or a table id under input/dmn
        #[arg(value_name = "FILE_OR_ID")]
        target: String,

        /// Operation to apply, in order (add-input, remove-input:<i>, add-output,
        /// remove-output:<i>, add-rule, remove-rule:<i>); indexes are 0-based
        #[arg(long = "op", value_name = "OP", required = true)]
        ops: Vec<EditOperation>,

        /// Save even if the result has validation errors
        #[arg(long)]
        no_validate: bool,
    },

    /// Rewrite a decision table in canonical form
    Fmt {
        /// Path to a .dmn file, or a table id under input/dmn
        #[arg(value_name = "FILE_OR_ID")]
        target: String,

        /// Only report whether the file is already canonical
        #[arg(long)]
        check: bool,
    },

    /// List stored decision tables
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
