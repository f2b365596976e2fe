#![deny(missing_docs)]

//! # Sample Synthesis
//!
//! Turns a [`SchemaNode`] into a representative example value used to pre-fill
//! request forms in the API Explorer.
//!
//! Rules:
//! - Past the depth ceiling every node becomes `null`.
//! - `enum` -> first literal.
//! - `object` -> the first [`MAX_SAMPLE_PROPERTIES`] properties, recursively.
//! - `array` -> exactly one element.
//! - `integer` / `number` -> `0`, `boolean` -> `false`.
//! - `string` -> `""`, or the run timestamp when `format: date-time`.
//! - Anything unresolvable -> `""`.

use crate::oas::resolver::resolve;
use crate::oas::schema::{SchemaNode, SchemaTable, FORMAT_DATE_TIME};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Default recursion ceiling for samples.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Properties kept per sampled object, in declaration order.
pub const MAX_SAMPLE_PROPERTIES: usize = 15;

/// Formats a timestamp the way the catalog emits all instants.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds example values from schemas.
///
/// Holds the schema table by reference and a single clock reading, so every
/// `date-time` sample of one run carries the same instant.
#[derive(Debug, Clone)]
pub struct SampleSynthesizer<'a> {
    table: &'a SchemaTable,
    max_depth: usize,
    now: DateTime<Utc>,
}

impl<'a> SampleSynthesizer<'a> {
    /// Creates a synthesizer with the default ceiling and the current time.
    pub fn new(table: &'a SchemaTable) -> Self {
        Self {
            table,
            max_depth: DEFAULT_MAX_DEPTH,
            now: Utc::now(),
        }
    }

    /// Overrides the depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Pins the clock used for `date-time` samples.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// The configured depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Synthesizes an example for `node`, treating it as sitting at `depth`.
    pub fn synthesize(&self, node: &SchemaNode, depth: usize) -> Value {
        if depth > self.max_depth {
            return Value::Null;
        }

        match resolve(node, self.table, depth, self.max_depth) {
            SchemaNode::Enum(values) => values.first().cloned().unwrap_or(Value::Null),
            SchemaNode::Object(props) => {
                let mut sample = Map::new();
                for (name, prop) in props.iter().take(MAX_SAMPLE_PROPERTIES) {
                    sample.insert(name.clone(), self.synthesize(prop, depth + 1));
                }
                Value::Object(sample)
            }
            SchemaNode::Array(items) => Value::Array(vec![self.synthesize(items, depth + 1)]),
            SchemaNode::Integer | SchemaNode::Number => Value::from(0),
            SchemaNode::Boolean => Value::Bool(false),
            SchemaNode::String { format } if format.as_deref() == Some(FORMAT_DATE_TIME) => {
                Value::String(format_timestamp(&self.now))
            }
            _ => Value::String(String::new()),
        }
    }

    /// Synthesizes `node` from the top and renders it as pretty-printed JSON.
    pub fn render(&self, node: &SchemaNode) -> String {
        let sample = self.synthesize(node, 0);
        // Serializing a `Value` cannot fail: map keys are always strings.
        serde_json::to_string_pretty(&sample).unwrap_or_default()
    }
}
