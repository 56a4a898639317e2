//! Export outcomes: per-project results and the batch report.

use crate::exporter::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Display link for a copied source file.
///
/// Rendered as an HTML anchor by the loader-page generator, e.g.
/// `<a href="Sketch.pde">Sketch</a>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    /// Visible link text: the source file name minus its extension.
    pub label: String,
    /// Name of the copied file inside the export folder.
    pub file_name: String,
}

impl fmt::Display for SourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\">{}</a>", self.file_name, self.label)
    }
}

/// Everything a loader-page generator needs about a finished export.
#[derive(Debug, Clone)]
pub struct AppletBundle {
    /// Folder the bundle was written into.
    pub export_folder: PathBuf,
    /// Description extracted from the main source file; may be empty.
    pub description: String,
    /// Links for the copied source files, in discovery order.
    pub source_links: Vec<SourceLink>,
    /// Archive names inside the export folder, main archive first.
    pub archives: Vec<String>,
    /// Declared canvas width.
    pub width: u32,
    /// Declared canvas height.
    pub height: u32,
    /// Declared renderer name.
    pub renderer: String,
    /// Whether the sketch links the OpenGL rendering backend; the
    /// generated loader page must alter its configuration when set.
    pub uses_opengl: bool,
}

/// Outcome of exporting one project, finalized exactly once.
#[derive(Debug)]
pub struct ExportResult {
    project: String,
    outcome: Result<AppletBundle, Error>,
}

impl ExportResult {
    pub(crate) fn success(project: String, bundle: AppletBundle) -> Self {
        Self {
            project,
            outcome: Ok(bundle),
        }
    }

    pub(crate) fn failure(project: String, error: Error) -> Self {
        Self {
            project,
            outcome: Err(error),
        }
    }

    /// Name of the exported project.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Whether the export succeeded.
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Bundle metadata for a successful export.
    pub fn bundle(&self) -> Option<&AppletBundle> {
        self.outcome.as_ref().ok()
    }

    /// Failure diagnostic for an unsuccessful export.
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }
}

/// Names of the projects that could not be exported, in batch order.
#[derive(Debug, Default)]
pub struct BatchReport {
    failed: Vec<String>,
}

impl BatchReport {
    pub(crate) fn record_failure(&mut self, project: &str) {
        self.failed.push(project.to_string());
    }

    /// Projects whose export failed, in the order they were attempted.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Whether every project in the batch exported successfully.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_link_renders_as_anchor() {
        let link = SourceLink {
            label: "Sketch".to_string(),
            file_name: "Sketch.pde".to_string(),
        };
        assert_eq!(link.to_string(), "<a href=\"Sketch.pde\">Sketch</a>");
    }

    #[test]
    fn report_keeps_failure_order() {
        let mut report = BatchReport::default();
        report.record_failure("B");
        report.record_failure("D");
        assert_eq!(report.failed(), ["B", "D"]);
        assert!(!report.all_succeeded());
    }
}
