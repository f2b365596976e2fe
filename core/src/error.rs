//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only conditions that must stop a generation run are errors. Schema anomalies
//! (unresolved references, missing tags, unlabelable domains) degrade to defaults
//! and never surface here.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input document could not be decoded as YAML/JSON of the expected shape.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The input document is well-formed but declares a version we do not read.
    #[from(ignore)]
    #[display("Unsupported Document: {_0}")]
    Unsupported(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
