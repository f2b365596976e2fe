#![deny(missing_docs)]

//! # Catalog Assembly
//!
//! Runs the whole pipeline (extract, group, stamp) and persists the result.
//!
//! The output file is written to a temporary sibling and renamed into place, so an
//! aborted run leaves either the previous artifact or nothing, never a partial one.

use crate::error::{AppError, AppResult};
use crate::extract::{extract_operations, DEFAULT_API_PREFIX};
use crate::group::group_operations;
use crate::models::CatalogDocument;
use crate::oas::document::ApiDocument;
use crate::sample::{format_timestamp, SampleSynthesizer, DEFAULT_MAX_DEPTH};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Prefix removed from path templates.
    pub api_prefix: String,
    /// Depth ceiling for sample synthesis.
    pub max_depth: usize,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Builds the catalog for `doc`, stamped with the current time.
pub fn build_catalog(doc: &ApiDocument, options: &CatalogOptions) -> CatalogDocument {
    build_catalog_at(doc, options, Utc::now())
}

/// Builds the catalog for `doc` with an explicit clock reading.
///
/// `now` stamps `generatedAt` and every `date-time` sample.
pub fn build_catalog_at(
    doc: &ApiDocument,
    options: &CatalogOptions,
    now: DateTime<Utc>,
) -> CatalogDocument {
    let synth = SampleSynthesizer::new(doc.schemas())
        .with_max_depth(options.max_depth)
        .with_now(now);

    let operations = extract_operations(doc, &synth, &options.api_prefix);
    let domains = group_operations(operations);

    CatalogDocument {
        generated_at: format_timestamp(&now),
        domains,
    }
}

/// Renders the catalog as pretty-printed JSON with a trailing newline.
pub fn render_catalog(catalog: &CatalogDocument) -> AppResult<String> {
    let mut out = serde_json::to_string_pretty(catalog)
        .map_err(|e| AppError::General(format!("Failed to serialize catalog: {}", e)))?;
    out.push('\n');
    Ok(out)
}

/// Atomically writes `catalog` to `output_path`, creating parent directories.
pub fn write_catalog(catalog: &CatalogDocument, output_path: &Path) -> AppResult<()> {
    let rendered = render_catalog(catalog)?;

    let parent = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|e| AppError::General(format!("Failed to create output dir: {}", e)))?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(rendered.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(output_path)
        .map_err(|e| AppError::General(format!("Failed to write catalog: {}", e.error)))?;

    Ok(())
}

/// Reads `input_path`, builds the catalog and writes it to `output_path`.
///
/// Nothing is written if the input cannot be read or parsed.
pub fn generate_catalog(
    input_path: &Path,
    output_path: &Path,
    options: &CatalogOptions,
) -> AppResult<CatalogDocument> {
    let doc = ApiDocument::from_path(input_path)?;
    let catalog = build_catalog(&doc, options);
    write_catalog(&catalog, output_path)?;

    tracing::info!(
        domains = catalog.domains.len(),
        operations = catalog.operation_count(),
        output = %output_path.display(),
        "catalog written"
    );
    Ok(catalog)
}
