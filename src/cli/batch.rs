//! Batch command implementation.
//!
//! Processes description files (one fragment per line, `#` lines are
//! comments) and emits the inferred annotations as tab-separated text,
//! a JSON array, or JSON Lines. Directories are scanned recursively for
//! the manifest-configured description extensions.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::discovery::{scan_directory, scan_sources, Manifest};
use crate::error::{Result, TypesiftError};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_type;

/// Process description files in bulk
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Files or directories to process (defaults to the manifest sources)
    pub paths: Vec<PathBuf>,

    /// Output format (overrides the manifest)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Batch output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Tab-separated `description<TAB>annotation` lines
    Text,
    /// A JSON array of records
    Json,
    /// One JSON record per line
    Jsonl,
}

impl Format {
    /// Resolve a manifest format name.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Format::Text),
            "json" => Some(Format::Json),
            "jsonl" => Some(Format::Jsonl),
            _ => None,
        }
    }
}

/// One processed description.
#[derive(Serialize, Debug)]
pub struct Record {
    /// The raw description text.
    pub text: String,
    /// The inferred annotation, when a rule matched.
    pub annotation: Option<String>,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let printer = Printer::new();
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let format = resolve_format(&args, &manifest)?;

    let files = if args.paths.is_empty() {
        if manifest.sources.is_empty() {
            scan_directory(Path::new("."), &manifest).files
        } else {
            scan_sources(&manifest.sources, Path::new("."), &manifest).files
        }
    } else {
        collect_files(&args.paths, &manifest)
    };
    if files.is_empty() {
        return Err(TypesiftError::Usage {
            message: "no description files found".to_string(),
            help: Some("Pass files directly, or check the manifest extensions".to_string()),
        });
    }

    let mut records = Vec::new();
    for file in &files {
        printer.status("Parsing", &display_path(file));
        records.extend(process_file(file)?);
    }

    let unresolved = records.iter().filter(|r| r.annotation.is_none()).count();
    let rendered = render(&records, format)?;

    match &args.output {
        Some(path) => fs::write(path, rendered).map_err(|e| TypesiftError::Io {
            path: path.clone(),
            message: format!("Failed to write output: {}", e),
        })?,
        None => print!("{}", rendered),
    }

    if unresolved > 0 {
        printer.warning(
            "Unresolved",
            &plural(unresolved, "description", "descriptions"),
        );
    }
    printer.success(
        "Parsed",
        &format!(
            "{} from {}",
            plural(records.len(), "description", "descriptions"),
            plural(files.len(), "file", "files"),
        ),
    );

    Ok(())
}

/// Expand the argument paths: files are taken as-is, directories are
/// scanned through the manifest rules.
fn collect_files(paths: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, manifest).files);
        } else if path.is_file() {
            files.push(path.clone());
        }
    }

    files
}

/// Parse every description line in one file.
fn process_file(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| TypesiftError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Record {
            text: line.to_string(),
            annotation: parse_type(line).map(|annotation| annotation.to_string()),
        })
        .collect())
}

/// Render records in the requested format, with a trailing newline.
fn render(records: &[Record], format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for record in records {
                out.push_str(&record.text);
                out.push('\t');
                out.push_str(record.annotation.as_deref().unwrap_or("-"));
                out.push('\n');
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        Format::Jsonl => {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Pick the output format: flag first, then manifest, then text.
fn resolve_format(args: &BatchArgs, manifest: &Manifest) -> Result<Format> {
    if let Some(format) = args.format {
        return Ok(format);
    }

    match &manifest.format {
        Some(name) => Format::from_name(name).ok_or_else(|| TypesiftError::Manifest {
            message: format!("Unknown output format: {}", name),
            help: Some("Use one of: text, json, jsonl".to_string()),
        }),
        None => Ok(Format::Text),
    }
}
