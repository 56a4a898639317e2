//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Applet export tool for sketch projects
#[derive(Parser, Debug)]
#[command(
    name = "sketch_export",
    version,
    about = "Exports sketch projects as self-contained applet bundles",
    long_about = "Builds each selected sketch project and packages it as a runnable applet \
bundle: a jar archive of the compiled output, the visible source files, a loading \
placeholder image, and any dependency archives from the sketch's code folder.

Usage:
  sketch_export ~/sketches/Wave
  sketch_export --resources /opt/sketch/resources ~/sketches/Wave ~/sketches/Orbit

Exit code 0 = every selected sketch was exported."
)]
pub struct Args {
    /// Sketch project directories to export, in selection order
    #[arg(value_name = "SKETCH", required = true)]
    pub sketches: Vec<PathBuf>,

    /// Root of the tool's resource bundle (default loading image, core libraries)
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "SKETCH_EXPORT_RESOURCES"
    )]
    pub resources: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        for sketch in &self.sketches {
            if !sketch.is_dir() {
                return Err(format!("Sketch directory does not exist: {}", sketch.display()));
            }
        }
        Ok(())
    }
}
