//! Top-level error types for the export tool.

use thiserror::Error;

/// Result type alias for tool-level operations
pub type Result<T> = std::result::Result<T, ExportToolError>;

/// Main error type wrapping every failure the tool can surface
#[derive(Error, Debug)]
pub enum ExportToolError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export pipeline errors
    #[error("Export error: {0}")]
    Export(#[from] crate::exporter::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
