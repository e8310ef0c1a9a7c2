//! Flat directory scan for candidate image files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SortError;

/// File name suffixes recognized as supported images. Matching is exact and
/// case-sensitive; `photo.JPG` is not a candidate.
const SUPPORTED_SUFFIXES: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Whether a file name marks a supported image type.
pub fn is_supported_image(file_name: &str) -> bool {
    SUPPORTED_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// List the candidate image files directly under `root`.
///
/// Subdirectories are never entered and symlinks are not followed into
/// directories; only regular files with a supported suffix qualify. The
/// returned order is the directory listing order, deliberately unsorted.
/// An empty result is not an error.
pub fn scan_root(root: &Path) -> Result<Vec<PathBuf>, SortError> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| SortError::Scan {
            path: root.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error")),
        })?;

        let path = entry.path();
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if path.is_file() && is_supported_image(name) {
            candidates.push(path.to_path_buf());
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image("photo.jpg"));
        assert!(is_supported_image("photo.jpeg"));
        assert!(is_supported_image("photo.png"));

        assert!(!is_supported_image("photo.JPG"));
        assert!(!is_supported_image("photo.Png"));
        assert!(!is_supported_image("photo.gif"));
        assert!(!is_supported_image("photo.jpg.txt"));
        assert!(!is_supported_image("notes"));
    }

    #[test]
    fn test_scan_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.jpeg", "c.png", "d.gif", "e.txt", "F.JPG"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let mut found: Vec<String> = scan_root(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        found.sort();

        assert_eq!(found, ["a.jpg", "b.jpeg", "c.png"]);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.png"), b"x").unwrap();

        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.png"), b"x").unwrap();

        let found = scan_root(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("top.png"));
    }

    #[test]
    fn test_scan_ignores_directories_with_image_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        assert!(scan_root(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_root(dir.path()).unwrap().is_empty());
    }
}
