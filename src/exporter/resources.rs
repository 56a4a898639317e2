//! Resource bundle of the export tool itself.
//!
//! The tool ships a small resource tree alongside the executable: the
//! default loading placeholder under `export/`, and the core libraries a
//! sketch may link against, of which the OpenGL rendering backend gets
//! special treatment in generated metadata.

use crate::exporter::predicates::LOADING_IMAGE;
use std::path::{Path, PathBuf};

/// Environment variable overriding the resource root.
pub const RESOURCES_ENV: &str = "SKETCH_EXPORT_RESOURCES";

/// Directory name of the resource tree next to the executable.
const RESOURCES_DIR: &str = "resources";

/// Resolved locations of the export tool's bundled resources.
#[derive(Debug, Clone)]
pub struct ToolResources {
    root: PathBuf,
}

impl ToolResources {
    /// Creates resources rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the resource root from, in order: an explicit override,
    /// the `SKETCH_EXPORT_RESOURCES` environment variable, or a
    /// `resources/` directory next to the executable.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        if let Some(root) = explicit {
            return Self::new(root);
        }
        if let Some(root) = std::env::var_os(RESOURCES_ENV) {
            return Self::new(PathBuf::from(root));
        }
        let exe_relative = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(RESOURCES_DIR)))
            .unwrap_or_else(|| PathBuf::from(RESOURCES_DIR));
        Self::new(exe_relative)
    }

    /// Resource root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bundled default loading placeholder image.
    pub fn default_loading_image(&self) -> PathBuf {
        self.root.join("export").join(LOADING_IMAGE)
    }

    /// Well-known path of the OpenGL rendering backend library. Sketches
    /// depending on this exact path need an OpenGL-aware loader page.
    pub fn opengl_library(&self) -> PathBuf {
        self.root
            .join("libraries")
            .join("opengl")
            .join("library")
            .join("opengl.jar")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_under_root() {
        let resources = ToolResources::new("/opt/sketch");
        assert_eq!(
            resources.default_loading_image(),
            PathBuf::from("/opt/sketch/export/loading.gif")
        );
        assert_eq!(
            resources.opengl_library(),
            PathBuf::from("/opt/sketch/libraries/opengl/library/opengl.jar")
        );
    }

    #[test]
    fn explicit_override_wins() {
        let resources = ToolResources::discover(Some(PathBuf::from("/custom")));
        assert_eq!(resources.root(), Path::new("/custom"));
    }
}
