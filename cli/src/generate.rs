#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads the API document and writes the API Explorer catalog.

use crate::args::SourceArgs;
use crate::error::CliResult;
use catalog_core::generate_catalog;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Output path for the catalog JSON.
    #[clap(long, short, env = "CATALOG_OUTPUT", default_value = "catalog.json")]
    pub output: PathBuf,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    tracing::info!(input = %args.source.input.display(), "generating catalog");

    let catalog = generate_catalog(&args.source.input, &args.output, &args.source.options())?;

    let duplicates = catalog.duplicate_keys();
    if !duplicates.is_empty() {
        tracing::warn!(
            count = duplicates.len(),
            keys = %duplicates.join(", "),
            "operation keys are not unique"
        );
    }

    println!(
        "Generated catalog at {:?} ({} domains, {} operations)",
        args.output,
        catalog.domains.len(),
        catalog.operation_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CatalogDocument, DEFAULT_API_PREFIX};
    use std::fs;
    use tempfile::tempdir;

    fn args(input: PathBuf, output: PathBuf) -> GenerateArgs {
        GenerateArgs {
            source: SourceArgs {
                input,
                api_prefix: DEFAULT_API_PREFIX.to_string(),
                max_depth: 3,
            },
            output,
        }
    }

    #[test]
    fn test_execute_generates_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("openapi.json");
        let output = dir.path().join("public/catalog.json");

        let json = r#"{
  "openapi": "3.0.1",
  "paths": {
    "/admin-api/wallets/{walletId}/freeze": {
      "post": {
        "tags": ["WalletController"],
        "summary": "Freeze wallet",
        "requestBody": {
          "content": {
            "application/json": {
              "schema": {"type": "object", "properties": {"reason": {"type": "string"}}}
            }
          }
        }
      }
    }
  }
}"#;
        fs::write(&input, json).unwrap();

        execute(&args(input, output.clone())).unwrap();

        let catalog: CatalogDocument =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(catalog.domains.len(), 1);
        assert_eq!(catalog.domains[0].label, "Wallet");
        let op = &catalog.domains[0].operations[0];
        assert_eq!(op.key, "post-wallets-walletid-freeze");
        assert_eq!(op.path_params, vec!["walletId".to_string()]);
        assert_eq!(op.sample_body.as_deref(), Some("{\n  \"reason\": \"\"\n}"));
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("catalog.json");

        let result = execute(&args(dir.path().join("missing.json"), output.clone()));
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
