//! DMN document decoder.
//!
//! Decoding happens in two steps. The document is first read into a small
//! element tree, then a single walk over the `decision` element collects raw
//! values into `Raw*` records. Every default lives in the `resolve` methods of
//! those records, so the leniency policy can be read in one place.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::DecodeError;
use crate::schema::{Input, Output, Rule, Table, TypeRef};

/// Decode a DMN document into a decision table.
///
/// Fails only when the text is not well-formed XML or when the `decision` /
/// `decisionTable` elements are missing. Any other missing element or
/// attribute falls back to a default.
pub fn decode(document: &str) -> Result<Table, DecodeError> {
    let root = parse_tree(document)?;

    let decision = if root.name == "decision" {
        &root
    } else {
        root.find("decision").ok_or_else(|| {
            DecodeError::MissingStructure("no <decision> element found".to_string())
        })?
    };

    let decision_table = decision.find("decisionTable").ok_or_else(|| {
        DecodeError::MissingStructure("no <decisionTable> element inside <decision>".to_string())
    })?;

    Ok(RawTable::collect(decision, decision_table).resolve())
}

// ============================================================================
// Intermediate records
// ============================================================================

struct RawTable {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    business_rule: Option<String>,
    trigger: Option<String>,
    inputs: Vec<RawInput>,
    outputs: Vec<RawOutput>,
    rules: Vec<RawRule>,
}

struct RawInput {
    id: Option<String>,
    label: Option<String>,
    expression: Option<String>,
    type_ref: Option<String>,
    description: Option<String>,
}

struct RawOutput {
    id: Option<String>,
    label: Option<String>,
    type_ref: Option<String>,
    description: Option<String>,
}

struct RawRule {
    id: Option<String>,
    description: Option<String>,
    input_entries: Vec<String>,
    output_entries: Vec<String>,
    annotations: Vec<String>,
}

impl RawTable {
    fn collect(decision: &Element, decision_table: &Element) -> Self {
        let extensions = decision.child("extensionElements");

        Self {
            id: decision.attr("id"),
            name: decision.attr("label").or_else(|| decision.attr("name")),
            description: decision.child_text("question"),
            business_rule: extensions.and_then(|e| e.descendant_text("businessRule")),
            trigger: extensions.and_then(|e| e.descendant_text("trigger")),
            inputs: decision_table
                .children_named("input")
                .map(RawInput::collect)
                .collect(),
            outputs: decision_table
                .children_named("output")
                .map(RawOutput::collect)
                .collect(),
            rules: decision_table
                .children_named("rule")
                .map(RawRule::collect)
                .collect(),
        }
    }

    fn resolve(self) -> Table {
        Table {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            business_rule: self.business_rule.unwrap_or_default(),
            trigger: self.trigger.unwrap_or_default(),
            inputs: numbered(self.inputs, RawInput::resolve),
            outputs: numbered(self.outputs, RawOutput::resolve),
            rules: numbered(self.rules, RawRule::resolve),
        }
    }
}

impl RawInput {
    fn collect(input: &Element) -> Self {
        let expression = input.child("inputExpression");

        Self {
            id: input.attr("id"),
            label: input.attr("label"),
            expression: expression.and_then(|e| e.child_text("text")),
            type_ref: expression
                .and_then(|e| e.attr("typeRef"))
                .or_else(|| input.attr("typeRef")),
            description: input.child_text("description"),
        }
    }

    fn resolve(self, position: usize) -> Input {
        Input::new(
            self.id.unwrap_or_else(|| format!("input{}", position)),
            self.label.unwrap_or_else(|| format!("Input {}", position)),
        )
        .with_expression(self.expression.unwrap_or_default())
        .with_type_ref(self.type_ref.map(TypeRef::from).unwrap_or_default())
        .with_description(self.description.unwrap_or_default())
    }
}

impl RawOutput {
    fn collect(output: &Element) -> Self {
        Self {
            id: output.attr("id"),
            label: output.attr("label").or_else(|| output.attr("name")),
            type_ref: output.attr("typeRef"),
            description: output.child_text("description"),
        }
    }

    fn resolve(self, position: usize) -> Output {
        Output::new(
            self.id.unwrap_or_else(|| format!("output{}", position)),
            self.label.unwrap_or_else(|| format!("Output {}", position)),
        )
        .with_type_ref(self.type_ref.map(TypeRef::from).unwrap_or_default())
        .with_description(self.description.unwrap_or_default())
    }
}

impl RawRule {
    fn collect(rule: &Element) -> Self {
        Self {
            id: rule.attr("id"),
            description: rule.child_text("description"),
            input_entries: rule.children_named("inputEntry").map(entry_text).collect(),
            output_entries: rule.children_named("outputEntry").map(entry_text).collect(),
            annotations: rule
                .children_named("annotationEntry")
                .map(entry_text)
                .collect(),
        }
    }

    fn resolve(self, position: usize) -> Rule {
        Rule {
            id: self.id.unwrap_or_else(|| format!("rule{}", position)),
            description: self.description.unwrap_or_default(),
            input_entries: self.input_entries,
            output_entries: self.output_entries,
            annotations: self.annotations,
        }
    }
}

/// Resolve records with their 1-based position.
fn numbered<R, T>(raw: Vec<R>, resolve: impl Fn(R, usize) -> T) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| resolve(r, i + 1))
        .collect()
}

/// Entries keep their value in a nested `<text>`; bare text is accepted too.
fn entry_text(entry: &Element) -> String {
    entry
        .child_text("text")
        .unwrap_or_else(|| entry.text.clone())
}

// ============================================================================
// Element tree
// ============================================================================

/// A parsed element. Names are local names (namespace prefixes dropped).
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    /// Concatenated character data directly inside this element.
    text: String,
}

impl Element {
    fn attr(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text.clone())
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant with the given name, depth-first in document order.
    fn find(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find_map(|c| if c.name == name { Some(c) } else { c.find(name) })
    }

    fn descendant_text(&self, name: &str) -> Option<String> {
        self.find(name).map(|e| e.text.clone())
    }
}

/// Deepest element nesting accepted. DMN tables nest fewer than ten levels.
const MAX_DEPTH: usize = 256;

fn parse_tree(document: &str) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            DecodeError::MalformedDocument(format!(
                "at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => {
                ensure_single_root(&root, &stack)?;
                if stack.len() >= MAX_DEPTH {
                    return Err(DecodeError::MalformedDocument(
                        "document nested too deeply".to_string(),
                    ));
                }
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                ensure_single_root(&root, &stack)?;
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    DecodeError::MalformedDocument("closing tag without opening tag".to_string())
                })?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
                push_text(&mut stack, &value)?;
            }
            Event::CData(data) => {
                let value = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
                push_text(&mut stack, &value)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::MalformedDocument(format!(
            "unexpected end of document: <{}> is not closed",
            open.name
        )));
    }

    root.ok_or_else(|| DecodeError::MalformedDocument("document has no root element".to_string()))
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, DecodeError> {
    let mut element = Element {
        name: local_name(start.local_name().as_ref())?,
        ..Element::default()
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
        let key = local_name(attr.key.local_name().as_ref())?;
        let value = attr
            .unescape_value()
            .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

fn close_element(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn ensure_single_root(root: &Option<Element>, stack: &[Element]) -> Result<(), DecodeError> {
    if root.is_some() && stack.is_empty() {
        return Err(DecodeError::MalformedDocument(
            "content after the root element".to_string(),
        ));
    }
    Ok(())
}

fn push_text(stack: &mut [Element], value: &str) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(value);
            Ok(())
        }
        None if value.trim().is_empty() => Ok(()),
        None => Err(DecodeError::MalformedDocument(
            "text outside the root element".to_string(),
        )),
    }
}

fn local_name(bytes: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| DecodeError::MalformedDocument(e.to_string()))
}
