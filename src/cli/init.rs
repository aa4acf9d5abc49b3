//! Init command implementation.
//!
//! Generates a starter `typesift.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{Result, TypesiftError};
use crate::output::{display_path, Printer};

/// Initialize a typesift project by generating a typesift.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing typesift.yaml
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = "\
# typesift project manifest
#
# sources:
#   - docs/
extensions:
  - txt
  - desc
format: text
";

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(TypesiftError::Usage {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, TEMPLATE).map_err(|e| TypesiftError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        assert!(manifest_path.exists());

        // The template must round-trip through the manifest parser.
        let content = fs::read_to_string(&manifest_path).unwrap();
        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.format.as_deref(), Some("text"));
        assert_eq!(manifest.extensions, vec!["txt", "desc"]);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: json\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: json\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("format: text"));
    }
}
