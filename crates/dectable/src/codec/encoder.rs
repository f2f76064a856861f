//! DMN document encoder.

use crate::schema::{Input, Output, Rule, Table};

use super::escape::escape;

const DMN_MODEL_NS: &str = "https://www.omg.org/spec/DMN/20191111/MODEL/";
const DMNDI_NS: &str = "https://www.omg.org/spec/DMN/20191111/DMNDI/";
const DC_NS: &str = "http://www.omg.org/spec/DMN/20180521/DC/";
const DAK_NS: &str = "http://smart.who.int/dak";

const HIT_POLICY: &str = "FIRST";
const ORIENTATION: &str = "Rule-as-Row";

/// Encoder configuration.
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Encode a table as a DMN document with default options.
///
/// The table is written as is; call the validator first if only valid tables
/// should be stored.
pub fn encode(table: &Table) -> String {
    encode_with(table, &EncoderOptions::default())
}

/// Encode a table as a DMN document.
///
/// Output order is fixed: decision metadata, inputs, outputs, then rules, each
/// in stored order. Within a rule: description, input entries, output entries,
/// annotations.
pub fn encode_with(table: &Table, options: &EncoderOptions) -> String {
    let mut w = XmlWriter::new(options.indent);
    w.declaration();

    let definitions_id = format!("{}_definitions", table.id);
    w.open(
        "definitions",
        &[
            ("xmlns", DMN_MODEL_NS),
            ("xmlns:dmndi", DMNDI_NS),
            ("xmlns:dc", DC_NS),
            ("xmlns:dak", DAK_NS),
            ("id", definitions_id.as_str()),
            ("name", table.name.as_str()),
            ("namespace", DAK_NS),
        ],
    );

    w.open(
        "decision",
        &[
            ("id", table.id.as_str()),
            ("name", table.name.as_str()),
            ("label", table.name.as_str()),
        ],
    );
    w.leaf("question", &[], &table.description);

    if !table.business_rule.is_empty() || !table.trigger.is_empty() {
        w.open("extensionElements", &[]);
        if !table.business_rule.is_empty() {
            w.leaf("dak:businessRule", &[], &table.business_rule);
        }
        if !table.trigger.is_empty() {
            w.leaf("dak:trigger", &[], &table.trigger);
        }
        w.close("extensionElements");
    }

    let table_id = format!("{}_table", table.id);
    w.open(
        "decisionTable",
        &[
            ("id", table_id.as_str()),
            ("hitPolicy", HIT_POLICY),
            ("preferredOrientation", ORIENTATION),
        ],
    );

    for input in &table.inputs {
        write_input(&mut w, input);
    }
    for output in &table.outputs {
        write_output(&mut w, output);
    }
    for rule in &table.rules {
        write_rule(&mut w, rule);
    }

    w.close("decisionTable");
    w.close("decision");
    w.close("definitions");

    w.finish()
}

fn write_input(w: &mut XmlWriter, input: &Input) {
    w.open(
        "input",
        &[("id", input.id.as_str()), ("label", input.label.as_str())],
    );
    if !input.description.is_empty() {
        w.leaf("description", &[], &input.description);
    }

    let expression_id = format!("{}_expression", input.id);
    w.open(
        "inputExpression",
        &[
            ("id", expression_id.as_str()),
            ("typeRef", input.type_ref.as_str()),
        ],
    );
    w.leaf("text", &[], &input.expression);
    w.close("inputExpression");
    w.close("input");
}

fn write_output(w: &mut XmlWriter, output: &Output) {
    let attrs = [
        ("id", output.id.as_str()),
        ("label", output.label.as_str()),
        ("name", output.label.as_str()),
        ("typeRef", output.type_ref.as_str()),
    ];

    if output.description.is_empty() {
        w.empty("output", &attrs);
    } else {
        w.open("output", &attrs);
        w.leaf("description", &[], &output.description);
        w.close("output");
    }
}

fn write_rule(w: &mut XmlWriter, rule: &Rule) {
    w.open("rule", &[("id", rule.id.as_str())]);
    w.leaf("description", &[], &rule.description);

    for (i, entry) in rule.input_entries.iter().enumerate() {
        let id = format!("{}_input{}", rule.id, i + 1);
        write_entry(w, "inputEntry", Some(id.as_str()), entry);
    }
    for (i, entry) in rule.output_entries.iter().enumerate() {
        let id = format!("{}_output{}", rule.id, i + 1);
        write_entry(w, "outputEntry", Some(id.as_str()), entry);
    }
    for annotation in &rule.annotations {
        write_entry(w, "annotationEntry", None, annotation);
    }

    w.close("rule");
}

fn write_entry(w: &mut XmlWriter, name: &str, id: Option<&str>, text: &str) {
    match id {
        Some(id) => w.open(name, &[("id", id)]),
        None => w.open(name, &[]),
    }
    w.leaf("text", &[], text);
    w.close(name);
}

/// Line-oriented writer; every value goes through [`escape`].
struct XmlWriter {
    buf: String,
    indent: usize,
    depth: usize,
}

impl XmlWriter {
    fn new(indent: usize) -> Self {
        Self {
            buf: String::new(),
            indent,
            depth: 0,
        }
    }

    fn declaration(&mut self) {
        self.buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs, ">");
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.pad();
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs, "/>");
    }

    /// An element holding only text, written on one line.
    fn leaf(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        self.pad();
        self.tag_head(name, attrs);
        self.buf.push('>');
        self.buf.push_str(&escape(text));
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)], end: &str) {
        self.pad();
        self.tag_head(name, attrs);
        self.buf.push_str(end);
        self.buf.push('\n');
    }

    fn tag_head(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(name);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
    }

    fn pad(&mut self) {
        self.buf
            .extend(std::iter::repeat(' ').take(self.depth * self.indent));
    }

    fn finish(self) -> String {
        self.buf
    }
}
