//! Name predicates used when sweeping project folders.
//!
//! Pure functions over file names so the selection rules can be tested
//! without touching a filesystem.

/// Extension of sketch source files.
pub const SOURCE_EXTENSION: &str = "pde";

/// Well-known file name of the loading placeholder image.
pub const LOADING_IMAGE: &str = "loading.gif";

/// Whether a file name marks a hidden file.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether a file name is a sketch source file (`.pde`, case-insensitive).
pub fn is_sketch_source(name: &str) -> bool {
    has_extension(name, &[SOURCE_EXTENSION])
}

/// Whether a file name looks like a bundled dependency archive
/// (`.jar` or `.zip`, case-insensitive).
pub fn is_bundled_archive(name: &str) -> bool {
    has_extension(name, &["jar", "zip"])
}

/// Visible link text for a copied source file: the name minus its extension.
pub fn link_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_names() {
        assert!(is_hidden(".secret.pde"));
        assert!(is_hidden(".gitignore"));
        assert!(!is_hidden("Sketch.pde"));
    }

    #[test]
    fn sketch_sources() {
        assert!(is_sketch_source("Sketch.pde"));
        assert!(is_sketch_source("Sketch.PDE"));
        assert!(!is_sketch_source("Sketch.java"));
        assert!(!is_sketch_source("pde"));
        assert!(!is_sketch_source(".pde"));
    }

    #[test]
    fn bundled_archives() {
        assert!(is_bundled_archive("sound.jar"));
        assert!(is_bundled_archive("data.ZIP"));
        assert!(!is_bundled_archive("notes.txt"));
        assert!(!is_bundled_archive("jar"));
    }

    #[test]
    fn link_stems() {
        assert_eq!(link_stem("Sketch.pde"), "Sketch");
        assert_eq!(link_stem("a.b.pde"), "a.b");
        assert_eq!(link_stem("noext"), "noext");
    }
}
