//! Shared test utilities for the example-gallery test suite.
//!
//! Provides in-memory stand-ins for the two filesystem seams
//! ([`ExampleSource`], [`PosterLookup`]) plus lookup helpers that panic with a
//! readable message on a miss.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let source = MemorySource::new(&[("demo.yaml", "title: Demo\nprompt: p")]);
//! let examples = load_examples(&source, &PosterSet::with(&["demo"]), &config).unwrap();
//!
//! let demo = find_example(&examples, "demo");
//! assert_eq!(demo.poster, "/posters/demo.png");
//! ```

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::discover::{ExampleSource, SourceError};
use crate::load::{LoadReport, SkipReason};
use crate::poster::PosterLookup;
use crate::types::CodeExample;

// =========================================================================
// In-memory seams
// =========================================================================

/// Example source backed by a path → contents map.
///
/// Paths are listed in the order given. A `None` body makes `read` fail.
pub struct MemorySource {
    order: Vec<PathBuf>,
    files: HashMap<PathBuf, Option<String>>,
    fail_root: bool,
}

impl MemorySource {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let mut source = Self {
            order: Vec::new(),
            files: HashMap::new(),
            fail_root: false,
        };
        for (path, body) in files {
            source.insert(path, Some(body.to_string()));
        }
        source
    }

    /// A source whose root cannot be listed.
    pub fn failing_root() -> Self {
        Self {
            order: Vec::new(),
            files: HashMap::new(),
            fail_root: true,
        }
    }

    /// Add a listed path whose read fails with `PermissionDenied`.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.insert(path, None);
        self
    }

    fn insert(&mut self, path: &str, body: Option<String>) {
        let path = PathBuf::from(path);
        self.order.push(path.clone());
        self.files.insert(path, body);
    }
}

impl ExampleSource for MemorySource {
    fn list(&self) -> Result<Vec<PathBuf>, SourceError> {
        if self.fail_root {
            return Err(SourceError::MissingRoot(PathBuf::from("<memory>")));
        }
        Ok(self.order.clone())
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(Some(body)) => Ok(body.clone()),
            Some(None) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "not listed")),
        }
    }
}

/// Poster lookup that reports a fixed set of ids as local.
pub struct PosterSet(HashSet<String>);

impl PosterSet {
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    pub fn with(ids: &[&str]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl PosterLookup for PosterSet {
    fn has_local_poster(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find an example by id. Panics if not found.
pub fn find_example<'a>(examples: &'a [CodeExample], id: &str) -> &'a CodeExample {
    examples.iter().find(|e| e.id == id).unwrap_or_else(|| {
        let ids = example_ids(examples);
        panic!("example '{id}' not found. Available: {ids:?}")
    })
}

/// Reason a file was skipped, matched by its listed path. Panics if not skipped.
pub fn skip_reason<'a>(report: &'a LoadReport, path: &str) -> &'a SkipReason {
    report
        .skipped
        .iter()
        .find(|s| s.path == Path::new(path))
        .map(|s| &s.reason)
        .unwrap_or_else(|| {
            let paths: Vec<_> = report.skipped.iter().map(|s| s.path.display().to_string()).collect();
            panic!("'{path}' was not skipped. Skipped: {paths:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All ids in output order.
pub fn example_ids(examples: &[CodeExample]) -> Vec<&str> {
    examples.iter().map(|e| e.id.as_str()).collect()
}

/// All titles in output order.
pub fn example_titles(examples: &[CodeExample]) -> Vec<&str> {
    examples.iter().map(|e| e.title.as_str()).collect()
}
