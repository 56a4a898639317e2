//! File copy primitives for staging export assets.
//!
//! Copies overwrite on conflict and create destination directories as
//! needed, so repeated exports into the same folder behave the same as a
//! first export.

use crate::bail;
use crate::exporter::error::{Error, ErrorExt, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination. Fails if the source path is a
/// directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{from:?} does not exist");
    }
    if !from.is_file() {
        bail!("{from:?} is not a file");
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying file to", to)?;
    Ok(())
}

/// Copies a file into a directory, keeping its file name.
///
/// Returns the destination path.
pub fn copy_into(from: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = from
        .file_name()
        .ok_or_else(|| Error::Generic(format!("{from:?} has no file name")))?;
    let dest = dest_dir.join(name);
    copy_file(from, &dest)?;
    Ok(dest)
}

/// Removes every entry directly inside `dir`, leaving the directory itself.
///
/// Missing directories are created instead, so the result is always an
/// existing, empty directory.
pub fn clear_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).fs_context("creating directory", dir)?;
        return Ok(());
    }
    for entry in fs::read_dir(dir).fs_context("reading directory", dir)? {
        let entry = entry.fs_context("reading directory", dir)?;
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).fs_context("removing directory", &path)?;
        } else {
            fs::remove_file(&path).fs_context("removing file", &path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("out/b.txt");
        fs::write(&src, "new").unwrap();
        fs::create_dir_all(dst.parent().unwrap()).unwrap();
        fs::write(&dst, "old").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn copy_file_rejects_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(copy_file(&missing, &dir.path().join("out.txt")).is_err());
    }

    #[test]
    fn clear_dir_empties_and_creates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("applet");
        fs::create_dir_all(target.join("nested")).unwrap();
        fs::write(target.join("stale.jar"), b"x").unwrap();

        clear_dir(&target).unwrap();
        assert!(target.exists());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);

        let fresh = dir.path().join("fresh");
        clear_dir(&fresh).unwrap();
        assert!(fresh.is_dir());
    }
}
