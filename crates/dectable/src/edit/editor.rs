//! Pure structural edits.
//!
//! Every function takes a table by reference and returns a new one. Column
//! changes resize every rule in the same step, so a table that was rectangular
//! before an edit is rectangular after it.

use crate::error::{DectableError, Result};
use crate::schema::{Input, Output, Rule, Table};

use super::operations::EditOperation;

/// Apply one operation.
pub fn apply(table: &Table, op: EditOperation) -> Result<Table> {
    match op {
        EditOperation::AddInput => Ok(add_input(table)),
        EditOperation::RemoveInput(index) => remove_input(table, index),
        EditOperation::AddOutput => Ok(add_output(table)),
        EditOperation::RemoveOutput(index) => remove_output(table, index),
        EditOperation::AddRule => Ok(add_rule(table)),
        EditOperation::RemoveRule(index) => remove_rule(table, index),
    }
}

/// Append an input column and an empty input entry to every rule.
pub fn add_input(table: &Table) -> Table {
    let mut next = table.clone();
    let n = next_free_number("input", next.inputs.iter().map(|i| i.id.as_str()));

    next.inputs
        .push(Input::new(format!("input{}", n), format!("Input {}", n)));
    for rule in &mut next.rules {
        rule.input_entries.push(String::new());
    }
    next
}

/// Remove the input column at `index` and its entry from every rule.
pub fn remove_input(table: &Table, index: usize) -> Result<Table> {
    check_index("input", index, table.inputs.len())?;

    let mut next = table.clone();
    next.inputs.remove(index);
    for rule in &mut next.rules {
        remove_slot(&mut rule.input_entries, index);
    }
    Ok(next)
}

/// Append an output column; every rule gains an empty output entry and
/// annotation slot.
pub fn add_output(table: &Table) -> Table {
    let mut next = table.clone();
    let n = next_free_number("output", next.outputs.iter().map(|o| o.id.as_str()));

    next.outputs
        .push(Output::new(format!("output{}", n), format!("Output {}", n)));
    for rule in &mut next.rules {
        rule.output_entries.push(String::new());
        rule.annotations.push(String::new());
    }
    next
}

/// Remove the output column at `index` with its entry and annotation slot
/// from every rule.
pub fn remove_output(table: &Table, index: usize) -> Result<Table> {
    check_index("output", index, table.outputs.len())?;

    let mut next = table.clone();
    next.outputs.remove(index);
    for rule in &mut next.rules {
        remove_slot(&mut rule.output_entries, index);
        remove_slot(&mut rule.annotations, index);
    }
    Ok(next)
}

/// Append a rule already sized to the table's columns.
pub fn add_rule(table: &Table) -> Table {
    let mut next = table.clone();
    let n = next_free_number("rule", next.rules.iter().map(|r| r.id.as_str()));

    next.rules.push(Rule::blank(
        format!("rule{}", n),
        next.inputs.len(),
        next.outputs.len(),
    ));
    next
}

/// Remove the rule at `index`.
pub fn remove_rule(table: &Table, index: usize) -> Result<Table> {
    check_index("rule", index, table.rules.len())?;

    let mut next = table.clone();
    next.rules.remove(index);
    Ok(next)
}

fn check_index(collection: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(DectableError::IndexOutOfRange {
            collection,
            index,
            len,
        })
    }
}

/// Rows decoded from hand-written documents may be short; only remove what is there.
fn remove_slot(entries: &mut Vec<String>, index: usize) {
    if index < entries.len() {
        entries.remove(index);
    }
}

/// Smallest n above the current count whose `{prefix}{n}` id is not taken.
fn next_free_number<'a>(prefix: &str, ids: impl Iterator<Item = &'a str> + Clone) -> usize {
    let mut n = ids.clone().count() + 1;
    while ids.clone().any(|id| id == format!("{}{}", prefix, n)) {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::draft_with_id("DAK.DT.T").with_name("Test")
    }

    #[test]
    fn test_add_output_grows_entries_and_annotations() {
        let mut start = table();
        start.rules[0].output_entries = vec!["x".to_string()];

        let next = add_output(&start);

        assert_eq!(next.outputs.len(), 2);
        assert_eq!(next.outputs[1].id, "output2");
        assert_eq!(next.outputs[1].label, "Output 2");
        assert_eq!(next.rules[0].output_entries, vec!["x", ""]);
        assert_eq!(next.rules[0].annotations.len(), start.rules[0].annotations.len() + 1);
        // The original is untouched.
        assert_eq!(start.outputs.len(), 1);
    }

    #[test]
    fn test_add_input_appends_empty_entries() {
        let start = add_rule(&table());
        let next = add_input(&start);

        assert_eq!(next.inputs[1].id, "input2");
        assert!(next.rules.iter().all(|r| r.input_entries == vec!["", ""]));
    }

    #[test]
    fn test_remove_input_drops_matching_entry() {
        let mut start = add_input(&table());
        start.rules[0].input_entries = vec!["a".to_string(), "b".to_string()];

        let next = remove_input(&start, 0).unwrap();

        assert_eq!(next.inputs.len(), 1);
        assert_eq!(next.inputs[0].id, "input2");
        assert_eq!(next.rules[0].input_entries, vec!["b"]);
    }

    #[test]
    fn test_remove_output_drops_annotation_slot() {
        let mut start = add_output(&table());
        start.rules[0].output_entries = vec!["o1".to_string(), "o2".to_string()];
        start.rules[0].annotations = vec!["n1".to_string(), "n2".to_string()];

        let next = remove_output(&start, 1).unwrap();

        assert_eq!(next.rules[0].output_entries, vec!["o1"]);
        assert_eq!(next.rules[0].annotations, vec!["n1"]);
    }

    #[test]
    fn test_add_rule_is_rectangular() {
        let start = add_output(&add_input(&add_input(&table())));
        let next = add_rule(&start);
        let rule = next.rules.last().unwrap();

        assert_eq!(rule.id, "rule2");
        assert_eq!(rule.input_entries.len(), 3);
        assert_eq!(rule.output_entries.len(), 2);
        assert_eq!(rule.annotations.len(), 2);
        assert!(next.is_rectangular());
    }

    #[test]
    fn test_generated_ids_skip_taken_ones() {
        let start = add_input(&table());
        let removed = remove_input(&start, 0).unwrap();
        let next = add_input(&removed);

        assert_eq!(removed.inputs[0].id, "input2");
        assert_eq!(next.inputs[1].id, "input3");
    }

    #[test]
    fn test_out_of_range_index() {
        let err = remove_rule(&table(), 1).unwrap_err();
        assert!(matches!(
            err,
            DectableError::IndexOutOfRange {
                collection: "rule",
                index: 1,
                len: 1
            }
        ));
        assert!(remove_input(&table(), 5).is_err());
        assert!(remove_output(&table(), 1).is_err());
    }

    #[test]
    fn test_apply_dispatches() {
        let next = apply(&table(), EditOperation::AddRule).unwrap();
        let next = apply(&next, EditOperation::RemoveRule(0)).unwrap();

        assert_eq!(next.rules.len(), 1);
        assert_eq!(next.rules[0].id, "rule2");
    }
}
