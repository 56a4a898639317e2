//! Error types for export operations.
//!
//! Every fatal pipeline step maps to exactly one variant here, so a failed
//! export can always say which step gave up and why.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while exporting a sketch project.
#[derive(Error, Debug)]
pub enum Error {
    /// The project is absent, closed, or was deleted externally.
    #[error("project is missing or not accessible")]
    InvalidProject,

    /// The build collaborator itself failed, as opposed to the build
    /// producing source errors.
    #[error("build infrastructure failed for `{project}`: {reason}")]
    BuildInfrastructure {
        /// Project being built
        project: String,
        /// Reason reported by the build collaborator
        reason: String,
    },

    /// The build completed but left the project in an error state.
    #[error("there were errors building `{project}`")]
    BuildFailed {
        /// Project that failed to build
        project: String,
    },

    /// No main source file could be discovered for the project.
    #[error("`{project}` has no main source file")]
    MissingEntryPoint {
        /// Project with no entry point
        project: String,
    },

    /// Neither the user-supplied nor the bundled loading image could be
    /// staged. The exported bundle is unusable without one.
    #[error("could not access the bundled export resources: {reason}")]
    MissingCoreResources {
        /// Underlying cause
        reason: String,
    },

    /// The archive's output stream could not be opened.
    #[error("could not create archive {path:?}: {source}")]
    ArchiveCreate {
        /// Archive path that could not be created
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// An entry could not be appended after the archive was opened. The
    /// archive is still finalized before this is returned.
    #[error("could not write archive entry `{entry}`: {reason}")]
    ArchiveWrite {
        /// Entry name that failed
        entry: String,
        /// Underlying cause
        reason: String,
    },

    /// IO errors with operation and path context
    #[error("{operation} {path:?}: {source}")]
    Fs {
        /// Operation being performed
        operation: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// IO errors without additional context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for one-off failures
    #[error("{0}")]
    Generic(String),
}

/// Returns early with an [`Error::Generic`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::exporter::Error::Generic(format!($($arg)*)).into())
    };
}

/// Extension trait attaching operation/path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] with the given context.
    fn fs_context(self, operation: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, operation: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            operation,
            path: path.to_path_buf(),
            source,
        })
    }
}
