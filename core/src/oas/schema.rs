#![deny(missing_docs)]

//! # Schema Model
//!
//! A reduced, tagged view over JSON Schema objects as they appear in OpenAPI
//! documents. Only the shape information needed to synthesize example values is
//! kept; validation keywords are dropped.
//!
//! Conversion from raw JSON never fails. Anything we cannot classify becomes
//! [`SchemaNode::Unknown`].

use crate::oas::ref_utils::schema_ref_name;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String format hint that synthesizes to a timestamp.
pub const FORMAT_DATE_TIME: &str = "date-time";

/// A value shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SchemaNode {
    /// `type: object`, properties in declaration order.
    Object(IndexMap<String, SchemaNode>),
    /// `type: array` with its item schema.
    Array(Box<SchemaNode>),
    /// `type: string` with an optional `format`.
    String {
        /// Format hint, e.g. `date-time`.
        format: Option<String>,
    },
    /// `type: integer`.
    Integer,
    /// `type: number`.
    Number,
    /// `type: boolean`.
    Boolean,
    /// `$ref` to a named entry of the schema table.
    Reference(String),
    /// `allOf` composition, members in declaration order.
    AllOf(Vec<SchemaNode>),
    /// `enum` with at least one literal.
    Enum(Vec<Value>),
    /// Unclassifiable node, or the result of a failed resolution.
    #[default]
    Unknown,
}

impl SchemaNode {
    /// Builds a node from a raw JSON Schema value.
    ///
    /// Precedence: `$ref`, then a non-empty `enum`, then a non-empty `allOf`, then `type`.
    /// Without `type`, `properties` implies an object and `items` implies an array.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return SchemaNode::Unknown;
        };

        if let Some(target) = obj.get("$ref").and_then(Value::as_str) {
            return SchemaNode::Reference(schema_ref_name(target));
        }

        if let Some(values) = obj.get("enum").and_then(Value::as_array) {
            if !values.is_empty() {
                return SchemaNode::Enum(values.clone());
            }
        }

        if let Some(members) = obj.get("allOf").and_then(Value::as_array) {
            if !members.is_empty() {
                return SchemaNode::AllOf(members.iter().map(SchemaNode::from_value).collect());
            }
        }

        match declared_type(value) {
            Some("object") => SchemaNode::Object(parse_properties(obj.get("properties"))),
            Some("array") => SchemaNode::Array(Box::new(parse_items(obj.get("items")))),
            Some("string") => SchemaNode::String {
                format: obj
                    .get("format")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            Some("integer") => SchemaNode::Integer,
            Some("number") => SchemaNode::Number,
            Some("boolean") => SchemaNode::Boolean,
            Some(_) => SchemaNode::Unknown,
            None if obj.contains_key("properties") => {
                SchemaNode::Object(parse_properties(obj.get("properties")))
            }
            None if obj.contains_key("items") => {
                SchemaNode::Array(Box::new(parse_items(obj.get("items"))))
            }
            None => SchemaNode::Unknown,
        }
    }

    /// Convenience for a plain `type: string` node.
    pub fn string() -> Self {
        SchemaNode::String { format: None }
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(SchemaNode::from_value(&raw))
    }
}

/// Reads `type`, accepting the OAS 3.1 array form (`[string, "null"]`).
fn declared_type(value: &Value) -> Option<&str> {
    match value.get("type")? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null"),
        _ => None,
    }
}

fn parse_properties(props: Option<&Value>) -> IndexMap<String, SchemaNode> {
    props
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_items(items: Option<&Value>) -> SchemaNode {
    items.map(SchemaNode::from_value).unwrap_or_default()
}

/// Named, read-only collection of reusable schemas (`components.schemas`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SchemaTable(IndexMap<String, SchemaNode>);

impl SchemaTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.0.get(name)
    }

    /// Adds or replaces a schema.
    pub fn insert(&mut self, name: impl Into<String>, node: SchemaNode) {
        self.0.insert(name.into(), node);
    }

    /// Number of schemas in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the table holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SchemaNode)> for SchemaTable {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_preserves_property_order() {
        let node = SchemaNode::from_value(&json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer"}
            }
        }));
        let SchemaNode::Object(props) = node else {
            panic!("expected object");
        };
        let names: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(props["alpha"], SchemaNode::Integer);
    }

    #[test]
    fn test_ref_takes_precedence() {
        let node = SchemaNode::from_value(&json!({
            "$ref": "#/components/schemas/User",
            "type": "object"
        }));
        assert_eq!(node, SchemaNode::Reference("User".into()));
    }

    #[test]
    fn test_enum_and_empty_enum() {
        let node = SchemaNode::from_value(&json!({"enum": ["A", "B"]}));
        assert_eq!(node, SchemaNode::Enum(vec![json!("A"), json!("B")]));

        let empty = SchemaNode::from_value(&json!({"type": "string", "enum": []}));
        assert_eq!(empty, SchemaNode::string());
    }

    #[test]
    fn test_all_of_members() {
        let node = SchemaNode::from_value(&json!({
            "allOf": [
                {"$ref": "#/components/schemas/Base"},
                {"type": "object", "properties": {"extra": {"type": "boolean"}}}
            ]
        }));
        let SchemaNode::AllOf(members) = node else {
            panic!("expected allOf");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[0], SchemaNode::Reference("Base".into()));
    }

    #[test]
    fn test_inferred_kinds() {
        let obj = SchemaNode::from_value(&json!({"properties": {"a": {"type": "number"}}}));
        assert!(matches!(obj, SchemaNode::Object(_)));

        let arr = SchemaNode::from_value(&json!({"items": {"type": "boolean"}}));
        assert_eq!(arr, SchemaNode::Array(Box::new(SchemaNode::Boolean)));

        let nullable = SchemaNode::from_value(&json!({"type": ["null", "integer"]}));
        assert_eq!(nullable, SchemaNode::Integer);
    }

    #[test]
    fn test_unclassifiable_is_unknown() {
        assert_eq!(SchemaNode::from_value(&json!({})), SchemaNode::Unknown);
        assert_eq!(SchemaNode::from_value(&json!(true)), SchemaNode::Unknown);
        assert_eq!(
            SchemaNode::from_value(&json!({"type": "file"})),
            SchemaNode::Unknown
        );
        assert_eq!(
            SchemaNode::from_value(&json!({"type": "array"})),
            SchemaNode::Array(Box::new(SchemaNode::Unknown))
        );
    }

    #[test]
    fn test_string_format() {
        let node = SchemaNode::from_value(&json!({"type": "string", "format": "date-time"}));
        assert_eq!(
            node,
            SchemaNode::String {
                format: Some(FORMAT_DATE_TIME.into())
            }
        );
    }

    #[test]
    fn test_table_deserializes_from_yaml() {
        let yaml = r#"
User:
  type: object
  properties:
    id: {type: integer}
Status:
  enum: [ACTIVE, FROZEN]
"#;
        let table: SchemaTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.len(), 2);
        assert!(matches!(table.get("Status"), Some(SchemaNode::Enum(_))));
    }
}
