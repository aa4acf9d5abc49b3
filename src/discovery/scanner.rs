//! File system scanner for discovering description files.
//!
//! Recursively walks directories and collects files whose extension the
//! manifest lists as a description extension.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for description files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered description files, in walk order.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
    }
}

/// Recursively scan a directory for description files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if manifest.matches_extension(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths; relative paths resolve against `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::default();

        let result = scan_directory(dir.path(), &manifest);

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_collects_description_files() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("camera.txt"), "float\n").unwrap();
        fs::write(dir.path().join("props.desc"), "int\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("docs/types")).unwrap();
        fs::write(dir.path().join("docs/types/camera.txt"), "float\n").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("camera.txt"), "float\n").unwrap();
        fs::write(dir.path().join("backup.txt.bak"), "stale").unwrap();

        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.files[0].to_string_lossy().contains("camera"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let manifest = Manifest::default();
        let result = scan_directory(Path::new("/nonexistent/path"), &manifest);

        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_sources_resolves_relative_paths() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/camera.txt"), "float\n").unwrap();

        let manifest = Manifest::default();
        let result = scan_sources(&["docs".to_string()], dir.path(), &manifest);

        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_scan_result_merge() {
        let mut a = ScanResult::new();
        a.files.push(PathBuf::from("a.txt"));

        let mut b = ScanResult::new();
        b.files.push(PathBuf::from("b.txt"));

        a.merge(b);

        assert_eq!(a.total(), 2);
    }
}
