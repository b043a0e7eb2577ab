//! Candidate file enumeration.
//!
//! [`ExampleSource`] is the seam between the loader and wherever example
//! documents live. [`FsSource`] is the production implementation: it walks the
//! examples root recursively and yields every `.yaml` / `.yml` file.
//!
//! ## Skipped during the walk
//!
//! - Hidden entries (name starts with `.`), except the root itself
//! - Directories whose name is listed in `exclude_dirs`
//! - Anything below the root that cannot be read (logged at `debug`)
//!
//! Symbolic links are followed, so a linked YAML file or directory is listed
//! like a real one. A link loop is reported by the walk and skipped.
//!
//! Only failing to open the root is an error. No ordering is guaranteed.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Examples root is not a directory: {0}")]
    MissingRoot(PathBuf),
    #[error("Failed to list examples root {0}: {1}")]
    Walk(PathBuf, #[source] walkdir::Error),
}

/// Where example documents come from.
pub trait ExampleSource: Sync {
    /// List candidate document paths. Failing here aborts the whole load.
    fn list(&self) -> Result<Vec<PathBuf>, SourceError>;

    /// Read one document. Failing here skips only that document.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Recursive filesystem walk over an examples root.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
    exclude_dirs: Vec<String>,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs: Vec::new(),
        }
    }

    pub fn with_exclusions(root: impl Into<PathBuf>, exclude_dirs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return true;
        }
        entry.file_type().is_dir() && self.exclude_dirs.iter().any(|d| *d == name)
    }
}

impl ExampleSource for FsSource {
    fn list(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.root.is_dir() {
            return Err(SourceError::MissingRoot(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !self.is_skipped(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(SourceError::Walk(self.root.clone(), err));
                }
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && is_yaml(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext.as_str()))
}
