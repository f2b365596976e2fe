#![deny(missing_docs)]

//! # Catalog Models
//!
//! Definition of the structures written to the catalog document.
//!
//! Field names serialize in camelCase, the shape the API Explorer reads.

use serde::{Deserialize, Serialize};

/// Tag used for operations that declare none.
pub const DEFAULT_TAG: &str = "Admin";

/// One REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Slug of method + path. Not unique when two paths slugify alike.
    pub key: String,
    /// Upper-case HTTP verb.
    pub method: String,
    /// Path with the API root stripped, `{param}` braces kept.
    pub path: String,
    /// Display label.
    pub label: String,
    /// True iff the operation declares an `application/json` body schema.
    pub has_body: bool,
    /// Pretty-printed example body, present iff `has_body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_body: Option<String>,
    /// Query parameter names, declaration order.
    pub query_params: Vec<String>,
    /// Path parameter names, order of appearance in `path`.
    pub path_params: Vec<String>,
}

/// An operation paired with the tag that selects its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedOperation {
    /// First declared tag, or [`DEFAULT_TAG`].
    pub tag: String,
    /// The operation itself.
    pub operation: Operation,
}

/// Operations sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Slug of `tag`.
    pub key: String,
    /// The tag as written in the document.
    pub tag: String,
    /// Humanized tag.
    pub label: String,
    /// Sorted by path, then method.
    pub operations: Vec<Operation>,
}

/// The generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// ISO-8601 generation timestamp.
    pub generated_at: String,
    /// Sorted by label.
    pub domains: Vec<Domain>,
}

impl CatalogDocument {
    /// Number of operations across all domains.
    pub fn operation_count(&self) -> usize {
        self.domains.iter().map(|d| d.operations.len()).sum()
    }

    /// Operation keys that occur more than once, sorted.
    ///
    /// Keys are not deduplicated at generation time; this surfaces the collisions.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut keys: Vec<&str> = self
            .domains
            .iter()
            .flat_map(|d| d.operations.iter().map(|op| op.key.as_str()))
            .collect();
        keys.sort_unstable();

        let mut dups: Vec<String> = keys
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0].to_string())
            .collect();
        dups.dedup();
        dups
    }
}
