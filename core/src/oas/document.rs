#![deny(missing_docs)]

//! # API Document
//!
//! Loads the input API description (YAML or JSON, OpenAPI 3.x) and exposes the
//! lookups the operation extractor needs.
//!
//! Anything that prevents reading the document is an error. Once loaded, the
//! document is immutable.

use crate::error::{AppError, AppResult};
use crate::oas::ref_utils::extract_component_name;
use crate::oas::schema::SchemaTable;
use crate::oas::shims::{
    ShimComponents, ShimOpenApi, ShimParameter, ShimPathItem, ShimRef, ShimRequestBody,
};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// The parsed input document.
#[derive(Debug, Clone, Default)]
pub struct ApiDocument {
    /// Path templates mapped to their Path Items, in document order.
    pub paths: IndexMap<String, ShimPathItem>,
    /// Reusable components (schemas, parameters, request bodies).
    pub components: ShimComponents,
}

impl ApiDocument {
    /// Parses a YAML or JSON string.
    ///
    /// Fails on blank or malformed input, on a root that is not a mapping, and on
    /// documents that do not declare OpenAPI 3.x.
    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Err(AppError::Parse("API document is empty".to_string()));
        }
        let raw: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse API document: {}", e)))?;
        if !raw.is_mapping() {
            return Err(AppError::Parse(
                "API document root must be a mapping".to_string(),
            ));
        }
        let shim: ShimOpenApi = serde_yaml::from_value(raw)
            .map_err(|e| AppError::Parse(format!("Failed to parse API document: {}", e)))?;
        validate_version(&shim)?;

        Ok(Self {
            paths: shim.paths,
            components: shim.components,
        })
    }

    /// Reads and parses the document at `path`.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::General(format!("Failed to read API document {:?}: {}", path, e))
        })?;
        Self::parse(&content)
    }

    /// The schema table (`components.schemas`).
    pub fn schemas(&self) -> &SchemaTable {
        &self.components.schemas
    }

    /// Total number of path x method pairs.
    pub fn operation_count(&self) -> usize {
        self.paths
            .values()
            .map(|item| item.operations().len())
            .sum()
    }

    /// Dereferences a parameter against `components.parameters`.
    pub fn resolve_parameter<'a>(
        &'a self,
        param: &'a ShimRef<ShimParameter>,
    ) -> Option<&'a ShimParameter> {
        match param {
            ShimRef::T(p) => Some(p),
            ShimRef::Ref { ref_location } => {
                let found = extract_component_name(ref_location, "parameters")
                    .and_then(|name| self.components.parameters.get(&name));
                if found.is_none() {
                    tracing::debug!(reference = %ref_location, "unresolved parameter reference");
                }
                found
            }
        }
    }

    /// Dereferences a request body against `components.requestBodies`.
    pub fn resolve_request_body<'a>(
        &'a self,
        body: &'a ShimRef<ShimRequestBody>,
    ) -> Option<&'a ShimRequestBody> {
        match body {
            ShimRef::T(b) => Some(b),
            ShimRef::Ref { ref_location } => {
                let found = extract_component_name(ref_location, "requestBodies")
                    .and_then(|name| self.components.request_bodies.get(&name));
                if found.is_none() {
                    tracing::debug!(reference = %ref_location, "unresolved request body reference");
                }
                found
            }
        }
    }
}

fn validate_version(shim: &ShimOpenApi) -> AppResult<()> {
    if let Some(version) = &shim.swagger {
        return Err(AppError::Unsupported(format!(
            "Swagger {} documents are not supported; convert to OpenAPI 3.x first.",
            version
        )));
    }
    match &shim.openapi {
        Some(version) if !version.starts_with("3.") => Err(AppError::Unsupported(format!(
            "Unsupported OpenAPI version: {}. Only 3.x is supported.",
            version
        ))),
        Some(_) => Ok(()),
        None => Err(AppError::Unsupported(
            "API document has no 'openapi' version field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
openapi: 3.0.1
paths:
  /admin-api/users:
    parameters:
      - $ref: '#/components/parameters/Tenant'
    get:
      parameters:
        - {name: page, in: query}
    post:
      requestBody:
        $ref: '#/components/requestBodies/NewUser'
components:
  parameters:
    Tenant: {name: tenant, in: query}
  requestBodies:
    NewUser:
      content:
        application/json:
          schema: {$ref: '#/components/schemas/User'}
  schemas:
    User:
      type: object
      properties:
        name: {type: string}
"#;

    #[test]
    fn test_parse_yaml() {
        let doc = ApiDocument::parse(DOC).unwrap();
        assert_eq!(doc.paths.len(), 1);
        assert_eq!(doc.operation_count(), 2);
        assert_eq!(doc.schemas().len(), 1);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"openapi": "3.0.0", "paths": {"/ping": {"get": {"summary": "Ping"}}}}"#;
        let doc = ApiDocument::parse(json).unwrap();
        assert_eq!(doc.operation_count(), 1);
    }

    #[test]
    fn test_resolve_parameter_and_body_refs() {
        let doc = ApiDocument::parse(DOC).unwrap();
        let item = &doc.paths["/admin-api/users"];

        let tenant = doc.resolve_parameter(&item.parameters[0]).unwrap();
        assert_eq!(tenant.name, "tenant");

        let post = item.post.as_ref().unwrap();
        let body = doc
            .resolve_request_body(post.request_body.as_ref().unwrap())
            .unwrap();
        assert!(body.content.contains_key("application/json"));
    }

    #[test]
    fn test_unresolved_parameter_ref() {
        let doc = ApiDocument::parse(DOC).unwrap();
        let missing = ShimRef::Ref {
            ref_location: "#/components/parameters/Nope".to_string(),
        };
        assert!(doc.resolve_parameter(&missing).is_none());
    }

    #[test]
    fn test_malformed_input_is_error() {
        let err = ApiDocument::parse("paths: [unclosed").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        let err = ApiDocument::parse("just a string").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_unsupported_versions() {
        let err = ApiDocument::parse("swagger: '2.0'\npaths: {}\n").unwrap_err();
        assert!(matches!(err, AppError::Unsupported(_)));

        let err = ApiDocument::parse("openapi: 4.0.0\npaths: {}\n").unwrap_err();
        assert!(matches!(err, AppError::Unsupported(_)));
    }

    #[test]
    fn test_blank_or_non_mapping_input_is_error() {
        for content in ["", "   \n\t\n", "- a\n- b\n", "42"] {
            let err = ApiDocument::parse(content).unwrap_err();
            assert!(matches!(err, AppError::Parse(_)), "{:?}", content);
        }
    }

    #[test]
    fn test_missing_openapi_version_is_error() {
        let err = ApiDocument::parse("foo: bar\n").unwrap_err();
        assert!(matches!(err, AppError::Unsupported(_)));

        let err = ApiDocument::parse("paths:\n  /ping:\n    get: {}\n").unwrap_err();
        assert!(matches!(err, AppError::Unsupported(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = ApiDocument::from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, AppError::General(_)));
        assert!(err.to_string().contains("here.yaml"));
    }
}
