//! Applet export pipeline.
//!
//! Sequences one export per project: build, validate, stage assets,
//! assemble the runnable archive, and report the outcome. Batch export
//! runs projects sequentially and aggregates per-project failures without
//! ever aborting the batch.

use crate::exporter::archive::ArchiveWriter;
use crate::exporter::assets;
use crate::exporter::description::extract_description;
use crate::exporter::error::{Error, ErrorExt, Result};
use crate::exporter::predicates::{self, LOADING_IMAGE};
use crate::exporter::report::{AppletBundle, BatchReport, ExportResult, SourceLink};
use crate::exporter::resources::ToolResources;
use crate::project::ProjectHandle;
use std::fs;
use std::path::{Path, PathBuf};

/// Orchestrates applet exports.
///
/// One pipeline serves any number of sequential exports; each run owns its
/// project's export folder and archive exclusively until it returns.
pub struct ExportPipeline {
    resources: ToolResources,
}

impl ExportPipeline {
    /// Creates a pipeline using the given tool resources.
    pub fn new(resources: ToolResources) -> Self {
        Self { resources }
    }

    /// Exports every project in selection order.
    ///
    /// Each project's export is independent: a failure is recorded in the
    /// report and the remaining projects are still attempted.
    pub fn export_batch(&self, projects: &mut [Box<dyn ProjectHandle>]) -> BatchReport {
        let mut report = BatchReport::default();
        for project in projects.iter_mut() {
            let result = self.export_one(project.as_mut());
            if !result.succeeded() {
                report.record_failure(result.project());
            }
        }
        report
    }

    /// Attempts to export exactly one project.
    ///
    /// Never panics; every failure mode becomes a failed [`ExportResult`]
    /// with a human-readable reason, and is also logged.
    pub fn export_one(&self, project: &mut dyn ProjectHandle) -> ExportResult {
        let name = project.name().to_string();
        log::info!("Exporting `{name}` as applet");
        match self.run_export(&name, project) {
            Ok(bundle) => {
                log::info!(
                    "Exported `{name}` to {}",
                    bundle.export_folder.display()
                );
                ExportResult::success(name, bundle)
            }
            Err(error) => {
                log::error!("Could not export `{name}`: {error}");
                ExportResult::failure(name, error)
            }
        }
    }

    /// The export sequence proper. Fatal steps short-circuit with `?`;
    /// best-effort steps log and continue.
    fn run_export(&self, name: &str, project: &mut dyn ProjectHandle) -> Result<AppletBundle> {
        // Preconditions: bail before anything destructive happens
        if !project.is_accessible() {
            return Err(Error::InvalidProject);
        }

        // Full rebuild; the user must fix source errors before exporting
        if let Err(e) = project.build() {
            return Err(Error::BuildInfrastructure {
                project: name.to_string(),
                reason: e.to_string(),
            });
        }
        if !project.last_build_succeeded() {
            return Err(Error::BuildFailed {
                project: name.to_string(),
            });
        }

        let source = project.main_source().ok_or_else(|| Error::MissingEntryPoint {
            project: name.to_string(),
        })?;
        let code =
            fs::read_to_string(&source.path).fs_context("reading main source", &source.path)?;

        // Only now is it safe to nuke prior export contents
        let export_folder = project.export_folder(true)?;

        let description = extract_description(&code);

        let members = match project.members() {
            Ok(members) => members,
            Err(e) => {
                log::error!("Could not list members of `{name}`: {e}");
                Vec::new()
            }
        };

        let source_links = self.copy_source_files(name, &members, &export_folder);
        self.stage_loading_image(&members, &export_folder)?;

        let mut archives = vec![self.assemble_archive(name, project, &export_folder)?];
        archives.extend(self.copy_bundled_archives(name, project.code_folder(), &export_folder));

        let uses_opengl = self.scan_dependencies(project);

        // Exports write outside the project system's own write path; ask
        // it to resynchronize. A refresh failure is logged, never fatal.
        if let Err(e) = project.refresh() {
            log::error!(
                "The project state could not refresh after exporting `{name}`. \
                 You may need to refresh it manually: {e}"
            );
        }

        Ok(AppletBundle {
            export_folder,
            description,
            source_links,
            archives,
            width: project.width(),
            height: project.height(),
            renderer: project.renderer_name().to_string(),
            uses_opengl,
        })
    }

    /// Copies the project's visible source files into the export folder
    /// and records a display link for each. Individual copy failures are
    /// logged and skipped.
    fn copy_source_files(
        &self,
        name: &str,
        members: &[PathBuf],
        export_folder: &Path,
    ) -> Vec<SourceLink> {
        let mut links = Vec::new();
        for member in members {
            if !member.is_file() {
                continue;
            }
            let Some(file_name) = member.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            if predicates::is_hidden(&file_name) || !predicates::is_sketch_source(&file_name) {
                continue;
            }
            match assets::copy_into(member, export_folder) {
                Ok(_) => links.push(SourceLink {
                    label: predicates::link_stem(&file_name).to_string(),
                    file_name,
                }),
                Err(e) => log::error!(
                    "Source file `{file_name}` could not be included in the export of \
                     `{name}`. Trying to continue the export anyway: {e}"
                ),
            }
        }
        links
    }

    /// Stages the loading placeholder: the user-supplied image from the
    /// project root when present, else the bundled default. Missing both
    /// is fatal; the bundle is unusable without a loading indicator.
    fn stage_loading_image(&self, members: &[PathBuf], export_folder: &Path) -> Result<()> {
        let user_image = members
            .iter()
            .find(|m| m.is_file() && m.file_name().is_some_and(|n| n == LOADING_IMAGE));
        if let Some(image) = user_image {
            match assets::copy_into(image, export_folder) {
                Ok(_) => return Ok(()),
                // Expected when the file vanished; fall through to the default
                Err(e) => log::debug!("User loading image could not be copied: {e}"),
            }
        }

        let bundled = self.resources.default_loading_image();
        assets::copy_file(&bundled, &export_folder.join(LOADING_IMAGE)).map_err(|e| {
            Error::MissingCoreResources {
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }

    /// Creates `<name>.jar` in the export folder and fills it with the
    /// compiled build output. The archive is finalized on every exit
    /// path, including entry-append failures.
    fn assemble_archive(
        &self,
        name: &str,
        project: &dyn ProjectHandle,
        export_folder: &Path,
    ) -> Result<String> {
        let archive_name = format!("{name}.jar");
        let mut writer = ArchiveWriter::create(&export_folder.join(&archive_name))?;

        let assembled = match project.build_output_folder() {
            Some(output) => writer.add_dir_contents(&output),
            None => {
                log::warn!("`{name}` has no compiled output folder; the archive will be empty");
                Ok(())
            }
        };
        let finished = writer.finish();
        assembled?;
        finished?;
        Ok(archive_name)
    }

    /// Copies dependency archives from the code folder as siblings of the
    /// main archive. Individual failures are logged and skipped.
    fn copy_bundled_archives(
        &self,
        name: &str,
        code_folder: Option<PathBuf>,
        export_folder: &Path,
    ) -> Vec<String> {
        let Some(code_folder) = code_folder else {
            return Vec::new();
        };
        let entries = match fs::read_dir(&code_folder) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!(
                    "Code folder entries could not be included in the export. \
                     `{name}` may not function properly: {e}"
                );
                return Vec::new();
            }
        };

        let mut copied = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if predicates::is_hidden(&file_name) || !predicates::is_bundled_archive(&file_name) {
                continue;
            }
            match assets::copy_into(&path, export_folder) {
                Ok(_) => copied.push(file_name),
                Err(e) => log::error!(
                    "Code folder entry `{file_name}` could not be included in the export. \
                     `{name}` may not function properly: {e}"
                ),
            }
        }
        copied.sort();
        copied
    }

    /// Tests each resolved dependency path against the well-known OpenGL
    /// backend library. Other dependencies are detected but not packaged;
    /// per-library packaging is a future extension of this scan.
    fn scan_dependencies(&self, project: &dyn ProjectHandle) -> bool {
        let opengl = self.resources.opengl_library();
        project
            .dependency_paths()
            .iter()
            .any(|path| *path == opengl)
    }
}
