//! Project manifest (typesift.yaml) parsing.
//!
//! The manifest defines project configuration: source directories to scan
//! for description files, the file extensions treated as descriptions, the
//! default batch output format, and exclude patterns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypesiftError};

/// Manifest filename looked up in the project root.
pub const MANIFEST_FILENAME: &str = "typesift.yaml";

/// Project manifest loaded from typesift.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for description files.
    /// Defaults to the current directory if empty.
    pub sources: Vec<String>,

    /// File extensions treated as description files.
    pub extensions: Vec<String>,

    /// Default batch output format: "text", "json", or "jsonl".
    pub format: Option<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            extensions: vec!["txt".to_string(), "desc".to_string()],
            format: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a typesift.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TypesiftError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest from `dir` when present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TypesiftError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check typesift.yaml syntax".to_string()),
        })
    }

    /// Whether a path matches any exclude pattern.
    ///
    /// Patterns are simple: a leading `*` matches any prefix, a trailing
    /// `*` matches any suffix, anything else matches as a substring.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Whether a file has one of the configured description extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        return path.ends_with(suffix);
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return path.starts_with(prefix) || path.contains(&format!("/{}", prefix));
    }
    path.contains(pattern)
}
