//! Command line interface for the export tool.
//!
//! The CLI is the selection step: it turns the directories the user named
//! into projects and hands them to the pipeline in order.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::exporter::{ExportPipeline, ToolResources};
use crate::project::{ProjectHandle, SketchProject};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let resources = ToolResources::discover(args.resources.clone());
    log::debug!("Using tool resources at {}", resources.root().display());

    let mut projects: Vec<Box<dyn ProjectHandle>> = Vec::with_capacity(args.sketches.len());
    for sketch in &args.sketches {
        projects.push(Box::new(SketchProject::open(sketch)?));
    }

    let pipeline = ExportPipeline::new(resources);
    let report = pipeline.export_batch(&mut projects);

    for name in report.failed() {
        log::info!("Unable to export {name}.");
        eprintln!("Unable to export {name}.");
    }

    Ok(if report.all_succeeded() { 0 } else { 1 })
}

/// Parse arguments without executing (for testing)
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Validate arguments without executing (for testing)
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}
