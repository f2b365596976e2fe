#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use catalog_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the catalog pipeline.
    #[display("{}", _0)]
    Core(AppError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
