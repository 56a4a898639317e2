//! Filesystem-backed sketch project.
//!
//! A sketch is a directory of `.pde` files with an optional `sketch.toml`
//! manifest. Every manifest field has a default, so a bare directory of
//! source files is a valid sketch.

use crate::exporter::error::{Error, ErrorExt, Result};
use crate::exporter::{assets, predicates};
use crate::project::{BuildOutcome, ProjectHandle, SourceRef};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Manifest file name inside a sketch directory.
pub const MANIFEST_NAME: &str = "sketch.toml";

/// Export folder name inside a sketch directory.
const EXPORT_FOLDER: &str = "applet";

/// Code folder of user-supplied dependency archives.
const CODE_FOLDER: &str = "code";

/// Per-sketch manifest, parsed from `sketch.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchManifest {
    /// Sketch metadata.
    pub sketch: SketchSection,
    /// Build configuration.
    pub build: BuildSection,
}

/// `[sketch]` section of the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchSection {
    /// Sketch name; defaults to the directory name.
    pub name: Option<String>,
    /// Declared canvas width.
    pub width: u32,
    /// Declared canvas height.
    pub height: u32,
    /// Declared renderer name.
    pub renderer: String,
    /// Main source file; defaults to `<name>.pde`.
    pub main: Option<String>,
}

impl Default for SketchSection {
    fn default() -> Self {
        Self {
            name: None,
            width: 100,
            height: 100,
            renderer: "JAVA2D".to_string(),
            main: None,
        }
    }
}

/// `[build]` section of the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSection {
    /// Command triggering a full rebuild, run in the sketch directory.
    /// When unset, the sketch is treated as prebuilt.
    pub command: Option<String>,
    /// Directory the build writes compiled output into, relative to the
    /// sketch root.
    pub output: String,
    /// Resolved dependency library paths, in declaration order.
    pub libraries: Vec<PathBuf>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            command: None,
            output: "build".to_string(),
            libraries: Vec::new(),
        }
    }
}

impl SketchManifest {
    /// Loads the manifest from a sketch directory, falling back to
    /// defaults when no `sketch.toml` exists.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path).fs_context("reading manifest", &path)?;
        toml::from_str(&text)
            .map_err(|e| Error::Generic(format!("invalid manifest {}: {e}", path.display())))
    }
}

/// A sketch directory exposed through the [`ProjectHandle`] capability
/// interface.
#[derive(Debug)]
pub struct SketchProject {
    root: PathBuf,
    name: String,
    manifest: SketchManifest,
    last_build: Option<BuildOutcome>,
}

impl SketchProject {
    /// Opens a sketch directory, reading its manifest if one exists.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest = SketchManifest::load(&root)?;
        let name = manifest.sketch.name.clone().unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "sketch".to_string())
        });
        Ok(Self {
            root,
            name,
            manifest,
            last_build: None,
        })
    }

    /// Sketch root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }

    /// Runs the configured build command, reporting spawn problems as
    /// infrastructure failures and a non-zero exit as source errors.
    fn run_build_command(&self, command: &str) -> Result<BuildOutcome> {
        let mut words = command.split_whitespace();
        let program = words.next().ok_or_else(|| {
            Error::Generic(format!("empty build command for `{}`", self.name))
        })?;
        let program = which::which(program)
            .map_err(|e| Error::Generic(format!("build tool `{program}` not found: {e}")))?;

        log::debug!("Running build command for `{}`: {command}", self.name);
        let output = Command::new(&program)
            .args(words)
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::Generic(format!("could not run build command: {e}")))?;

        if output.status.success() {
            Ok(BuildOutcome::Clean)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.lines() {
                log::debug!("[build {}] {line}", self.name);
            }
            Ok(BuildOutcome::WithErrors)
        }
    }
}

impl ProjectHandle for SketchProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_accessible(&self) -> bool {
        self.root.is_dir()
    }

    fn build(&mut self) -> Result<BuildOutcome> {
        let outcome = match &self.manifest.build.command {
            Some(command) => self.run_build_command(command)?,
            // No build step configured: the sketch is prebuilt
            None => BuildOutcome::Clean,
        };
        self.last_build = Some(outcome);
        Ok(outcome)
    }

    fn last_build_succeeded(&self) -> bool {
        self.last_build == Some(BuildOutcome::Clean)
    }

    fn main_source(&self) -> Option<SourceRef> {
        let name = match &self.manifest.sketch.main {
            Some(main) => main.clone(),
            None => format!("{}.{}", self.name, predicates::SOURCE_EXTENSION),
        };
        let path = self.root.join(&name);
        path.is_file().then_some(SourceRef { name, path })
    }

    fn export_folder(&self, clear: bool) -> Result<PathBuf> {
        let folder = self.root.join(EXPORT_FOLDER);
        if clear {
            assets::clear_dir(&folder)?;
        } else {
            fs::create_dir_all(&folder).fs_context("creating export folder", &folder)?;
        }
        Ok(folder)
    }

    fn build_output_folder(&self) -> Option<PathBuf> {
        let output = self.resolve(&self.manifest.build.output);
        output.is_dir().then_some(output)
    }

    fn code_folder(&self) -> Option<PathBuf> {
        let code = self.root.join(CODE_FOLDER);
        code.is_dir().then_some(code)
    }

    fn dependency_paths(&self) -> Vec<PathBuf> {
        self.manifest
            .build
            .libraries
            .iter()
            .map(|p| self.resolve(p))
            .collect()
    }

    fn width(&self) -> u32 {
        self.manifest.sketch.width
    }

    fn height(&self) -> u32 {
        self.manifest.sketch.height
    }

    fn renderer_name(&self) -> &str {
        &self.manifest.sketch.renderer
    }

    fn members(&self) -> Result<Vec<PathBuf>> {
        let mut members = Vec::new();
        for entry in fs::read_dir(&self.root).fs_context("reading project", &self.root)? {
            let entry = entry.fs_context("reading project", &self.root)?;
            members.push(entry.path());
        }
        members.sort();
        Ok(members)
    }

    fn refresh(&self) -> Result<()> {
        // Nothing caches directory state in this adapter; verify the root
        // is still reachable so a vanished project surfaces here.
        fs::metadata(&self.root).fs_context("refreshing project", &self.root)?;
        log::debug!("Refreshed project state for `{}`", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Wave");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("Wave.pde"), "void setup() {}").unwrap();

        let project = SketchProject::open(&root).unwrap();
        assert_eq!(project.name(), "Wave");
        assert_eq!(project.width(), 100);
        assert_eq!(project.height(), 100);
        assert_eq!(project.renderer_name(), "JAVA2D");
        assert_eq!(project.main_source().unwrap().name, "Wave.pde");
        assert!(project.code_folder().is_none());
    }

    #[test]
    fn manifest_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Orbit");
        fs::create_dir(&root).unwrap();
        fs::write(
            root.join(MANIFEST_NAME),
            r#"
[sketch]
width = 640
height = 480
renderer = "P3D"
main = "Entry.pde"

[build]
libraries = ["/opt/libs/sound.jar"]
"#,
        )
        .unwrap();
        fs::write(root.join("Entry.pde"), "void draw() {}").unwrap();

        let project = SketchProject::open(&root).unwrap();
        assert_eq!(project.width(), 640);
        assert_eq!(project.height(), 480);
        assert_eq!(project.renderer_name(), "P3D");
        assert_eq!(project.main_source().unwrap().name, "Entry.pde");
        assert_eq!(
            project.dependency_paths(),
            vec![PathBuf::from("/opt/libs/sound.jar")]
        );
    }

    #[test]
    fn build_without_command_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = SketchProject::open(dir.path()).unwrap();
        assert!(!project.last_build_succeeded());
        assert_eq!(project.build().unwrap(), BuildOutcome::Clean);
        assert!(project.last_build_succeeded());
    }

    #[test]
    fn failing_build_command_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_NAME),
            "[build]\ncommand = \"false\"\n",
        )
        .unwrap();

        let mut project = SketchProject::open(dir.path()).unwrap();
        assert_eq!(project.build().unwrap(), BuildOutcome::WithErrors);
        assert!(!project.last_build_succeeded());
    }

    #[test]
    fn missing_build_tool_is_infrastructure_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_NAME),
            "[build]\ncommand = \"definitely-not-a-real-tool-9z\"\n",
        )
        .unwrap();

        let mut project = SketchProject::open(dir.path()).unwrap();
        assert!(project.build().is_err());
        assert!(!project.last_build_succeeded());
    }
}
