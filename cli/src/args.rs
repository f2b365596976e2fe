#![deny(missing_docs)]

//! # Shared Arguments
//!
//! Options common to every command. Each flag falls back to a `CATALOG_*`
//! environment variable (a `.env` file is loaded before parsing).

use catalog_core::{CatalogOptions, DEFAULT_API_PREFIX, DEFAULT_MAX_DEPTH};
use std::path::PathBuf;

/// Where to read the API document from and how to interpret it.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    #[clap(long, short, env = "CATALOG_INPUT", default_value = "openapi.json")]
    pub input: PathBuf,

    /// API root prefix stripped from every path.
    #[clap(long, env = "CATALOG_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,

    /// Recursion ceiling for sample request bodies.
    #[clap(
        long,
        env = "CATALOG_MAX_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = parse_max_depth
    )]
    pub max_depth: usize,
}

impl SourceArgs {
    /// Pipeline options derived from the flags.
    pub fn options(&self) -> CatalogOptions {
        CatalogOptions {
            api_prefix: self.api_prefix.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Helper to parse a depth ceiling of at least 1.
fn parse_max_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .parse()
        .map_err(|_| format!("invalid depth `{}`: expected a positive integer", s))?;
    if depth == 0 {
        return Err("depth must be at least 1".to_string());
    }
    Ok(depth)
}
