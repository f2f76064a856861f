//! Validators for checking a decision table's structure.

use indexmap::IndexMap;

use crate::schema::Table;

use super::message::{ValidationKind, ValidationMessage};

/// Trait for validators.
pub trait Validator {
    /// Inspect the table and return every violation found.
    fn validate(&self, table: &Table) -> Vec<ValidationMessage>;
}

/// Checks that the table has a name and an id.
pub struct MetadataValidator;

impl Validator for MetadataValidator {
    fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        if table.name.trim().is_empty() {
            messages.push(ValidationMessage::new(
                ValidationKind::MissingName,
                "table",
                "Decision table name is required",
            ));
        }
        if table.id.trim().is_empty() {
            messages.push(ValidationMessage::new(
                ValidationKind::MissingId,
                "table",
                "Decision table ID is required",
            ));
        }

        messages
    }
}

/// Checks that there is at least one input, output and rule.
pub struct CardinalityValidator;

impl Validator for CardinalityValidator {
    fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        let checks = [
            (
                table.inputs.is_empty(),
                ValidationKind::NoInputs,
                "At least one input is required",
            ),
            (
                table.outputs.is_empty(),
                ValidationKind::NoOutputs,
                "At least one output is required",
            ),
            (
                table.rules.is_empty(),
                ValidationKind::NoRules,
                "At least one rule is required",
            ),
        ];

        checks
            .into_iter()
            .filter(|(violated, _, _)| *violated)
            .map(|(_, kind, text)| ValidationMessage::new(kind, "table", text))
            .collect()
    }
}

/// Checks column headings and input expressions.
pub struct ColumnValidator;

impl Validator for ColumnValidator {
    fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        for (i, input) in table.inputs.iter().enumerate() {
            let subject = format!("input {}", i + 1);
            if input.label.trim().is_empty() {
                messages.push(ValidationMessage::new(
                    ValidationKind::MissingInputLabel,
                    &subject,
                    format!("Input {}: label is required", i + 1),
                ));
            }
            if input.expression.trim().is_empty() {
                messages.push(ValidationMessage::new(
                    ValidationKind::MissingInputExpression,
                    &subject,
                    format!("Input {}: expression is required", i + 1),
                ));
            }
        }

        for (i, output) in table.outputs.iter().enumerate() {
            if output.label.trim().is_empty() {
                messages.push(ValidationMessage::new(
                    ValidationKind::MissingOutputLabel,
                    format!("output {}", i + 1),
                    format!("Output {}: label is required", i + 1),
                ));
            }
        }

        messages
    }
}

/// Checks that every rule has one entry per column.
pub struct RuleShapeValidator;

impl Validator for RuleShapeValidator {
    fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        let inputs = table.inputs.len();
        let outputs = table.outputs.len();

        for (i, rule) in table.rules.iter().enumerate() {
            let subject = format!("rule {}", i + 1);
            if rule.input_entries.len() != inputs {
                messages.push(ValidationMessage::new(
                    ValidationKind::InputEntryCount,
                    &subject,
                    format!(
                        "Rule {}: has {} input entries but the table has {} inputs",
                        i + 1,
                        rule.input_entries.len(),
                        inputs
                    ),
                ));
            }
            if rule.output_entries.len() != outputs {
                messages.push(ValidationMessage::new(
                    ValidationKind::OutputEntryCount,
                    &subject,
                    format!(
                        "Rule {}: has {} output entries but the table has {} outputs",
                        i + 1,
                        rule.output_entries.len(),
                        outputs
                    ),
                ));
            }
        }

        messages
    }
}

/// Checks that ids are unique within inputs, within outputs and within rules.
///
/// Ids may repeat across collections.
pub struct DuplicateIdValidator;

impl Validator for DuplicateIdValidator {
    fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        let collections: [(&str, Vec<&str>); 3] = [
            ("input", table.inputs.iter().map(|i| i.id.as_str()).collect()),
            ("output", table.outputs.iter().map(|o| o.id.as_str()).collect()),
            ("rule", table.rules.iter().map(|r| r.id.as_str()).collect()),
        ];

        for (collection, ids) in collections {
            for (id, count) in count_ids(&ids) {
                if count > 1 {
                    messages.push(ValidationMessage::new(
                        ValidationKind::DuplicateId,
                        collection,
                        format!("Duplicate {} ID '{}' used {} times", collection, id, count),
                    ));
                }
            }
        }

        messages
    }
}

/// Occurrences per id, in first-seen order.
fn count_ids<'a>(ids: &[&'a str]) -> IndexMap<&'a str, usize> {
    let mut counts = IndexMap::new();
    for id in ids {
        *counts.entry(*id).or_insert(0) += 1;
    }
    counts
}

/// Runs every validator in a fixed order.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    /// Create a new validation engine with all default validators.
    pub fn new() -> Self {
        Self {
            validators: vec![
                Box::new(MetadataValidator),
                Box::new(CardinalityValidator),
                Box::new(ColumnValidator),
                Box::new(RuleShapeValidator),
                Box::new(DuplicateIdValidator),
            ],
        }
    }

    /// Run all validators and collect their messages.
    ///
    /// Messages keep validator order; nothing is sorted or deduplicated.
    pub fn validate(&self, table: &Table) -> Vec<ValidationMessage> {
        self.validators
            .iter()
            .flat_map(|v| v.validate(table))
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a table with the default engine. An empty result means valid.
pub fn validate(table: &Table) -> Vec<ValidationMessage> {
    ValidationEngine::new().validate(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Input, Output, Rule};

    fn valid_table() -> Table {
        let mut table = Table::draft_with_id("DAK.DT.V").with_name("Vitals");
        table.inputs[0].expression = "heartRate".to_string();
        table
    }

    fn kinds(messages: &[ValidationMessage]) -> Vec<ValidationKind> {
        messages.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_valid_table_has_no_messages() {
        assert!(validate(&valid_table()).is_empty());
    }

    #[test]
    fn test_three_independent_violations() {
        let mut table = valid_table();
        table.name.clear();
        table.inputs.push(Input::new("input2", "Input 2"));
        table.rules.push(Rule::blank("rule2", 2, 1));

        // rule1 still has a single input entry; input2 has no expression.
        let messages = validate(&table);

        assert_eq!(messages.len(), 3);
        assert_eq!(
            kinds(&messages),
            vec![
                ValidationKind::MissingName,
                ValidationKind::MissingInputExpression,
                ValidationKind::InputEntryCount,
            ]
        );
        assert_eq!(messages[2].subject, "rule 1");
    }

    #[test]
    fn test_fixed_message_order() {
        let table = Table {
            id: String::new(),
            name: String::new(),
            inputs: vec![Input::new("a", "")],
            outputs: vec![Output::new("b", "")],
            rules: vec![Rule::blank("r", 2, 0)],
            ..Table::default()
        };

        assert_eq!(
            kinds(&validate(&table)),
            vec![
                ValidationKind::MissingName,
                ValidationKind::MissingId,
                ValidationKind::MissingInputLabel,
                ValidationKind::MissingInputExpression,
                ValidationKind::MissingOutputLabel,
                ValidationKind::InputEntryCount,
                ValidationKind::OutputEntryCount,
            ]
        );
    }

    #[test]
    fn test_empty_collections() {
        let table = Table::new("DAK.DT.E").with_name("Empty");
        let messages = validate(&table);

        assert_eq!(
            kinds(&messages),
            vec![
                ValidationKind::NoInputs,
                ValidationKind::NoOutputs,
                ValidationKind::NoRules
            ]
        );
        assert_eq!(messages[0].message, "At least one input is required");
    }

    #[test]
    fn test_entry_count_message_text() {
        let mut table = valid_table();
        table.rules[0].output_entries.push("extra".to_string());
        let messages = validate(&table);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].subject, "rule 1");
        assert_eq!(
            messages[0].to_string(),
            "Rule 1: has 2 output entries but the table has 1 outputs"
        );
    }

    #[test]
    fn test_duplicate_ids_within_collection_only() {
        let mut table = valid_table();
        table.outputs[0].id = "input1".to_string();
        assert!(validate(&table).is_empty());

        table.inputs.push(Input::new("input1", "Again").with_expression("y"));
        for rule in &mut table.rules {
            rule.input_entries.push(String::new());
        }
        let messages = validate(&table);

        assert_eq!(kinds(&messages), vec![ValidationKind::DuplicateId]);
        assert_eq!(messages[0].message, "Duplicate input ID 'input1' used 2 times");
    }
}
