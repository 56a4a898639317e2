//! Archive creation for the runnable bundle.
//!
//! Thin wrapper over the `zip` crate that owns one write-only, append-only
//! archive for the duration of an export. Callers must [`finish`] the
//! archive on every exit path so no truncated file is left behind.
//!
//! [`finish`]: ArchiveWriter::finish

use crate::exporter::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writer for one export archive.
#[derive(Debug)]
pub struct ArchiveWriter {
    inner: ZipWriter<File>,
    path: PathBuf,
}

impl ArchiveWriter {
    /// Creates a new archive at `path`.
    ///
    /// Returns [`Error::ArchiveCreate`] when the output stream cannot be
    /// opened.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::ArchiveCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: ZipWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Path of the archive being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one file under the given entry name.
    pub fn add_file(&mut self, entry_name: &str, src: &Path) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let write = |writer: &mut ZipWriter<File>| -> std::result::Result<(), String> {
            let bytes = std::fs::read(src).map_err(|e| e.to_string())?;
            writer
                .start_file(entry_name, options)
                .map_err(|e| e.to_string())?;
            writer.write_all(&bytes).map_err(|e| e.to_string())?;
            Ok(())
        };
        write(&mut self.inner).map_err(|reason| Error::ArchiveWrite {
            entry: entry_name.to_string(),
            reason,
        })
    }

    /// Appends every file under `dir`, entries named by their path
    /// relative to `dir`.
    pub fn add_dir_contents(&mut self, dir: &Path) -> Result<()> {
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| Error::ArchiveWrite {
                entry: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| Error::ArchiveWrite {
                    entry: entry.path().display().to_string(),
                    reason: e.to_string(),
                })?;
            self.add_file(&entry_name(relative), entry.path())?;
        }
        Ok(())
    }

    /// Finalizes the archive, flushing the central directory to disk.
    pub fn finish(self) -> Result<()> {
        self.inner.finish().map_err(|e| Error::ArchiveWrite {
            entry: String::new(),
            reason: format!("finalizing archive: {e}"),
        })?;
        Ok(())
    }
}

/// Archive entry name for a relative path, with forward-slash separators
/// on every platform.
fn entry_name(relative: &Path) -> String {
    relative.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn archives_directory_contents_by_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("build");
        fs::create_dir_all(out.join("sub")).unwrap();
        fs::write(out.join("Main.class"), b"main").unwrap();
        fs::write(out.join("sub/Helper.class"), b"helper").unwrap();

        let jar = dir.path().join("sketch.jar");
        let mut writer = ArchiveWriter::create(&jar).unwrap();
        writer.add_dir_contents(&out).unwrap();
        writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&jar).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"Main.class".to_string()));
        assert!(names.contains(&"sub/Helper.class".to_string()));
    }

    #[test]
    fn create_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing_parent = dir.path().join("no/such/dir/sketch.jar");
        let err = ArchiveWriter::create(&missing_parent).unwrap_err();
        assert!(matches!(err, Error::ArchiveCreate { .. }));
    }
}
