//! Property-based tests for the codec and structural editor.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: the decoder never crashes on any input
//! 2. **Round trip**: editor-built tables survive encode then decode
//! 3. **Invariants**: column edits keep every rule rectangular
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p dectable --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p dectable --test property_tests
//! ```

use proptest::prelude::*;

use dectable::{EditOperation, Table, TypeRef, decode, edit, encode, escape, unescape, validate};

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings heavy in reserved markup characters and entity look-alikes.
fn markup_heavy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("&".to_string()),
            Just("<".to_string()),
            Just(">".to_string()),
            Just("\"".to_string()),
            Just("'".to_string()),
            Just("&amp;".to_string()),
            Just("&#39;".to_string()),
            "[a-z ]{0,4}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

/// Field text: printable characters, including reserved ones.
fn field_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:;()<>=&'\"\\-+*/]{0,24}"
}

fn type_ref() -> impl Strategy<Value = TypeRef> {
    prop::sample::select(TypeRef::EDITABLE.to_vec())
}

fn edit_operation() -> impl Strategy<Value = EditOperation> {
    prop_oneof![
        Just(EditOperation::AddInput),
        Just(EditOperation::AddOutput),
        Just(EditOperation::AddRule),
        (0usize..6).prop_map(EditOperation::RemoveInput),
        (0usize..6).prop_map(EditOperation::RemoveOutput),
        (0usize..6).prop_map(EditOperation::RemoveRule),
    ]
}

/// Apply operations in order, skipping those whose index is out of range.
fn run_operations(ops: &[EditOperation]) -> Table {
    let mut table = Table::draft_with_id("DAK.DT.PROP").with_name("Property");
    for op in ops {
        if let Ok(next) = edit::apply(&table, *op) {
            table = next;
        }
    }
    table
}

/// A table shaped by random edits, then filled with random text.
fn populated_table() -> impl Strategy<Value = Table> {
    (
        prop::collection::vec(edit_operation(), 0..16),
        prop::collection::vec(field_text(), 64),
        prop::collection::vec(type_ref(), 16),
    )
        .prop_map(|(ops, texts, types)| {
            let mut table = run_operations(&ops);
            let mut text = texts.into_iter().cycle();
            let mut types = types.into_iter().cycle();
            let mut next = move || text.next().unwrap_or_default();

            table.name = next();
            table.description = next();
            table.business_rule = next();
            table.trigger = next();
            for input in &mut table.inputs {
                input.label = next();
                input.expression = next();
                input.description = next();
                input.type_ref = types.next().unwrap_or_default();
            }
            for output in &mut table.outputs {
                output.label = next();
                output.description = next();
                output.type_ref = types.next().unwrap_or_default();
            }
            for rule in &mut table.rules {
                rule.description = next();
                for entry in rule
                    .input_entries
                    .iter_mut()
                    .chain(rule.output_entries.iter_mut())
                    .chain(rule.annotations.iter_mut())
                {
                    *entry = next();
                }
            }
            table
        })
}

// =============================================================================
// Escaper Properties
// =============================================================================

proptest! {
    /// Unescaping an escaped string gives the original back.
    #[test]
    fn escape_round_trips(input in markup_heavy()) {
        prop_assert_eq!(unescape(&escape(&input)), input);
    }

    /// Escaped text contains no raw reserved characters except entity ampersands.
    #[test]
    fn escaped_text_has_no_reserved_characters(input in markup_heavy()) {
        let escaped = escape(&input);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    /// Round trip holds for arbitrary Unicode as well.
    #[test]
    fn escape_round_trips_any_string(input in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&input)), input);
    }
}

// =============================================================================
// Editor Properties
// =============================================================================

proptest! {
    /// Any sequence of edits leaves every rule rectangular.
    #[test]
    fn edits_preserve_rectangularity(ops in prop::collection::vec(edit_operation(), 0..40)) {
        let table = run_operations(&ops);

        for rule in &table.rules {
            prop_assert_eq!(rule.input_entries.len(), table.inputs.len());
            prop_assert_eq!(rule.output_entries.len(), table.outputs.len());
            prop_assert_eq!(rule.annotations.len(), table.outputs.len());
        }
    }

    /// Generated ids never repeat within a collection.
    #[test]
    fn edits_keep_ids_unique(ops in prop::collection::vec(edit_operation(), 0..40)) {
        let mut table = run_operations(&ops);
        table.inputs.iter_mut().for_each(|i| i.expression = "x".to_string());

        let duplicates = validate(&table)
            .into_iter()
            .filter(|m| m.kind == dectable::ValidationKind::DuplicateId)
            .count();
        prop_assert_eq!(duplicates, 0);
    }

    /// Out-of-range removals fail without touching the table.
    #[test]
    fn out_of_range_removal_is_an_error(extra in 0usize..10) {
        let table = Table::draft_with_id("DAK.DT.P").with_name("P");
        let index = table.rules.len() + extra;

        prop_assert!(edit::remove_rule(&table, index).is_err());
        prop_assert!(edit::remove_input(&table, table.inputs.len() + extra).is_err());
    }
}

// =============================================================================
// Codec Properties
// =============================================================================

proptest! {
    /// decode(encode(t)) reproduces t field for field.
    #[test]
    fn encode_then_decode_is_identity(table in populated_table()) {
        let document = encode(&table);
        let decoded = decode(&document);

        prop_assert!(decoded.is_ok(), "decode failed: {:?}\n{}", decoded, document);
        prop_assert_eq!(decoded.unwrap(), table);
    }

    /// The decoder never panics on arbitrary text.
    #[test]
    fn decode_never_panics(input in any::<String>()) {
        let _ = decode(&input);
    }

    /// The decoder never panics on near-DMN documents with random content.
    #[test]
    fn decode_never_panics_on_mangled_dmn(cut in 0usize..400, junk in "[<>/&a-z\"= ]{0,10}") {
        let document = encode(&Table::draft_with_id("DAK.DT.M").with_name("M"));
        let cut = document
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= cut)
            .unwrap_or(document.len());
        let mangled = format!("{}{}{}", &document[..cut], junk, &document[cut..]);

        let _ = decode(&mangled);
    }
}
