#![deny(missing_docs)]

//! # Document Shims
//!
//! Lenient structures acting as an Intermediate Deserialization Layer.
//! These structs map directly to the OpenAPI YAML/JSON objects the catalog reads;
//! every other keyword is ignored.
//!
//! Schemas are not deserialized by serde's derive machinery: they go through
//! [`SchemaNode`]'s own `Deserialize` impl, which never fails on odd shapes.

use crate::oas::schema::{SchemaNode, SchemaTable};
use indexmap::IndexMap;
use serde::Deserialize;

/// HTTP methods an OpenAPI Path Item can carry, in Path Item field order.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Schema for the root document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimOpenApi {
    /// OpenAPI version (e.g. "3.0.3").
    pub openapi: Option<String>,

    /// Swagger version (e.g. "2.0"), only read to reject such documents.
    pub swagger: Option<String>,

    /// Path templates mapped to their Path Items, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, ShimPathItem>,

    /// Reusable components.
    #[serde(default)]
    pub components: ShimComponents,
}

/// The subset of `components` the catalog dereferences into.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimComponents {
    /// The schema table (`components.schemas`).
    #[serde(default)]
    pub schemas: SchemaTable,

    /// Reusable parameters (`components.parameters`).
    #[serde(default)]
    pub parameters: IndexMap<String, ShimParameter>,

    /// Reusable request bodies (`components.requestBodies`).
    #[serde(default, rename = "requestBodies")]
    pub request_bodies: IndexMap<String, ShimRequestBody>,
}

/// A Path Item: per-method operations plus parameters shared by all of them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimPathItem {
    /// Parameters applying to every operation of this path.
    #[serde(default)]
    pub parameters: Vec<ShimRef<ShimParameter>>,
    /// GET operation.
    pub get: Option<ShimOperation>,
    /// PUT operation.
    pub put: Option<ShimOperation>,
    /// POST operation.
    pub post: Option<ShimOperation>,
    /// DELETE operation.
    pub delete: Option<ShimOperation>,
    /// OPTIONS operation.
    pub options: Option<ShimOperation>,
    /// HEAD operation.
    pub head: Option<ShimOperation>,
    /// PATCH operation.
    pub patch: Option<ShimOperation>,
    /// TRACE operation.
    pub trace: Option<ShimOperation>,
}

impl ShimPathItem {
    /// Yields `(method, operation)` for every declared HTTP method, in [`HTTP_METHODS`] order.
    pub fn operations(&self) -> Vec<(&'static str, &ShimOperation)> {
        let slots = [
            &self.get,
            &self.put,
            &self.post,
            &self.delete,
            &self.options,
            &self.head,
            &self.patch,
            &self.trace,
        ];
        HTTP_METHODS
            .iter()
            .zip(slots)
            .filter_map(|(method, op)| op.as_ref().map(|op| (*method, op)))
            .collect()
    }
}

/// An Operation object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimOperation {
    /// Tags; the first one selects the catalog domain.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Short summary, preferred as the display label.
    pub summary: Option<String>,

    /// Unique operation id, label fallback.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<ShimRef<ShimParameter>>,

    /// Request body, inline or by reference.
    #[serde(rename = "requestBody")]
    pub request_body: Option<ShimRef<ShimRequestBody>>,
}

/// A Parameter object. Only location and name matter here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimParameter {
    /// Name of the parameter.
    pub name: String,
    /// Location of the parameter (query, path, header, cookie).
    #[serde(rename = "in")]
    pub parameter_in: String,
}

/// A Request Body object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimRequestBody {
    /// Media types mapped to their descriptions.
    #[serde(default)]
    pub content: IndexMap<String, ShimMediaType>,
}

/// A Media Type object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimMediaType {
    /// Body schema for this media type.
    pub schema: Option<SchemaNode>,
}

/// Either a `$ref` object or an inline value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShimRef<T> {
    /// `{ $ref: "#/components/..." }`
    Ref {
        /// Reference target.
        #[serde(rename = "$ref")]
        ref_location: String,
    },
    /// Inline definition.
    T(T),
}
