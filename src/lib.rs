//! Applet export pipeline for sketch projects.
//!
//! This library packages a successfully-built sketch project into a
//! self-contained, redistributable bundle:
//! - a runnable jar archive of the compiled output
//! - the sketch's visible source files, with display links
//! - a loading placeholder image (user-supplied or bundled default)
//! - dependency archives from the sketch's code folder
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod exporter;
pub mod project;

// Re-export commonly used types
pub use error::{CliError, ExportToolError, Result};
pub use exporter::{AppletBundle, BatchReport, ExportPipeline, ExportResult, ToolResources};
pub use project::{BuildOutcome, ProjectHandle, SketchProject};
