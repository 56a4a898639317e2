//! Project capability interface consumed by the export pipeline.
//!
//! The pipeline depends only on the narrow [`ProjectHandle`] trait, not on
//! any concrete project or workspace model. [`SketchProject`] is the
//! filesystem-backed adapter used by the CLI; host environments with their
//! own project model supply their own implementation.

mod sketch;

pub use sketch::{SketchManifest, SketchProject};

use crate::exporter::Result;
use std::path::PathBuf;

/// How a completed build left the project.
///
/// An infrastructure failure (the build collaborator itself broke) is an
/// `Err` from [`ProjectHandle::build`], not a `BuildOutcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Build completed and the project's error state is clean.
    Clean,
    /// Build completed but the project has source errors.
    WithErrors,
}

/// Reference to a project's main source file.
#[derive(Debug, Clone)]
pub struct SourceRef {
    /// File name of the main source.
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
}

/// Capabilities the export pipeline needs from a buildable project.
pub trait ProjectHandle {
    /// Project name, used for the archive and in diagnostics.
    fn name(&self) -> &str;

    /// Whether the project is still available (not closed or deleted
    /// externally).
    fn is_accessible(&self) -> bool;

    /// Triggers a full rebuild.
    ///
    /// `Err` means the build infrastructure itself failed; a build that
    /// ran but produced source errors returns
    /// `Ok(BuildOutcome::WithErrors)`.
    fn build(&mut self) -> Result<BuildOutcome>;

    /// Whether the most recent build left a clean error state.
    fn last_build_succeeded(&self) -> bool;

    /// The project's main source file, if one is discoverable.
    fn main_source(&self) -> Option<SourceRef>;

    /// The project's designated export directory, created if absent.
    ///
    /// With `clear` set, all prior contents are removed first; the caller
    /// must own the folder exclusively for the duration of the run.
    fn export_folder(&self, clear: bool) -> Result<PathBuf>;

    /// Folder holding the compiled build output, if the project has one.
    fn build_output_folder(&self) -> Option<PathBuf>;

    /// The project's code folder of user-supplied dependency archives,
    /// if present.
    fn code_folder(&self) -> Option<PathBuf>;

    /// Resolved dependency library paths, in declaration order.
    fn dependency_paths(&self) -> Vec<PathBuf>;

    /// Declared canvas width.
    fn width(&self) -> u32;

    /// Declared canvas height.
    fn height(&self) -> u32;

    /// Declared renderer name.
    fn renderer_name(&self) -> &str;

    /// Direct children of the project root.
    fn members(&self) -> Result<Vec<PathBuf>>;

    /// Resynchronizes the owning project system after on-disk contents
    /// changed outside its own write path.
    fn refresh(&self) -> Result<()>;
}
