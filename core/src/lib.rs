#![deny(missing_docs)]

//! # Catalog Core
//!
//! Turns an OpenAPI 3 document into the API Explorer catalog: operations grouped
//! by tag, each with a synthesized example request body.
//!
//! Pipeline: [`ApiDocument`] -> [`extract_operations`] (with [`SampleSynthesizer`])
//! -> [`group_operations`] -> [`CatalogDocument`].

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) parsing utilities.
pub mod oas;

/// Example value synthesis.
pub mod sample;

/// Key, slug and label derivation.
pub mod naming;

/// Catalog output structures.
pub mod models;

/// Path x method walk.
pub mod extract;

/// Tag grouping and ordering.
pub mod group;

/// Pipeline assembly and persistence.
pub mod catalog;

pub use catalog::{
    build_catalog, build_catalog_at, generate_catalog, render_catalog, write_catalog,
    CatalogOptions,
};
pub use error::{AppError, AppResult};
pub use extract::{extract_operations, DEFAULT_API_PREFIX};
pub use group::group_operations;
pub use models::{CatalogDocument, Domain, Operation, TaggedOperation, DEFAULT_TAG};
pub use naming::{humanize_tag, slugify};
pub use oas::{resolve, ApiDocument, SchemaNode, SchemaTable};
pub use sample::{SampleSynthesizer, DEFAULT_MAX_DEPTH, MAX_SAMPLE_PROPERTIES};
