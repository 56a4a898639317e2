//! Export pipeline and its leaf collaborators.

pub mod archive;
pub mod assets;
pub mod description;
pub mod error;
pub mod pipeline;
pub mod predicates;
pub mod report;
pub mod resources;

// Re-export all public types
pub use archive::ArchiveWriter;
pub use error::{Error, ErrorExt, Result};
pub use pipeline::ExportPipeline;
pub use report::{AppletBundle, BatchReport, ExportResult, SourceLink};
pub use resources::ToolResources;
