#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading and validating the input document.
//! - **shims**: Deserialization layer for paths, parameters and request bodies.
//! - **schema**: The reduced schema model and schema table.
//! - **resolver**: `$ref` / `allOf` resolution against the schema table.

pub mod document;
mod ref_utils;
pub mod resolver;
pub mod schema;
pub mod shims;

pub use document::ApiDocument;
pub use resolver::resolve;
pub use schema::{SchemaNode, SchemaTable};
