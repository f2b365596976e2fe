#![deny(missing_docs)]

//! # Inspect Command
//!
//! Builds the catalog in memory and prints a per-domain summary without
//! writing anything.

use crate::args::SourceArgs;
use crate::error::CliResult;
use catalog_core::{build_catalog, ApiDocument, CatalogDocument};
use std::fmt::Write as _;
use std::io::Write;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    #[clap(flatten)]
    pub source: SourceArgs,
}

/// Executes the inspection, printing to stdout.
pub fn execute(args: &InspectArgs) -> CliResult<()> {
    let doc = ApiDocument::from_path(&args.source.input)?;
    let catalog = build_catalog(&doc, &args.source.options());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(summarize(&catalog).as_bytes())?;
    Ok(())
}

/// One line per domain, then any duplicated operation keys.
pub fn summarize(catalog: &CatalogDocument) -> String {
    let mut out = String::new();
    for domain in &catalog.domains {
        let _ = writeln!(
            out,
            "{:<32} {:<32} {:>4}",
            domain.label,
            domain.key,
            domain.operations.len()
        );
    }
    let _ = writeln!(
        out,
        "{} domains, {} operations",
        catalog.domains.len(),
        catalog.operation_count()
    );

    let duplicates = catalog.duplicate_keys();
    if !duplicates.is_empty() {
        let _ = writeln!(out, "duplicate keys:");
        for key in duplicates {
            let _ = writeln!(out, "  {}", key);
        }
    }
    out
}
