//! Example discovery and record assembly.
//!
//! Turns a directory of YAML example definitions into a sorted list of
//! [`CodeExample`] records:
//!
//! ```text
//! list files → read → parse YAML → title/prompt gate → normalize fields
//!            → resolve poster → assemble → sort by title
//! ```
//!
//! ## Failure policy
//!
//! Each file stands alone. A file that cannot be read, does not parse, is not a
//! mapping, or lacks a usable title or prompt contributes nothing and the load
//! carries on. Those skips are logged at `debug` and collected in
//! [`LoadReport::skipped`], but [`load_examples`] never turns them into
//! errors. Only failing to list the examples root aborts the call.
//!
//! ## Identity
//!
//! The record id is the file name minus `.yaml` / `.yml`. An `id` key inside
//! the document does not change it; a disagreement is only reported in
//! [`LoadReport::id_mismatches`].
//!
//! ## Ordering
//!
//! Files are processed in parallel and the results merged afterwards, so
//! enumeration order never leaks into the output. The final order is
//! root-locale collation ([`TitleCollator`]) on the title, with the id as
//! tie-breaker.

use crate::collation::{CollationError, TitleCollator};
use crate::config::{self, ConfigError, GalleryConfig};
use crate::discover::{ExampleSource, FsSource, SourceError};
use crate::normalize;
use crate::poster::{self, LocalPosters, PosterLookup};
use crate::types::CodeExample;
use rayon::prelude::*;
use serde_yaml::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Collation(#[from] CollationError),
}

/// Why a candidate file produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Read(String),
    Parse(String),
    NotAMapping,
    MissingTitle,
    MissingPrompt,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Read(e) => write!(f, "unreadable: {e}"),
            SkipReason::Parse(e) => write!(f, "invalid YAML: {e}"),
            SkipReason::NotAMapping => write!(f, "document is not a mapping"),
            SkipReason::MissingTitle => write!(f, "no string `title` or `name`"),
            SkipReason::MissingPrompt => write!(f, "no string `prompt`"),
        }
    }
}

/// A candidate file that was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A document whose in-body `id` differs from its file-derived id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMismatch {
    pub path: PathBuf,
    pub declared: String,
    pub id: String,
}

/// Everything a load produced, including what it left out.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records sorted by title.
    pub examples: Vec<CodeExample>,
    /// Files skipped, in enumeration order.
    pub skipped: Vec<Skipped>,
    pub id_mismatches: Vec<IdMismatch>,
}

struct Built {
    example: CodeExample,
    mismatch: Option<IdMismatch>,
}

/// Load, validate, and sort all examples from `source`.
///
/// Per-file problems are skipped silently; see the [module docs](self).
pub fn load_examples(
    source: &dyn ExampleSource,
    posters: &dyn PosterLookup,
    config: &GalleryConfig,
) -> Result<Vec<CodeExample>, LoadError> {
    Ok(load_report(source, posters, config)?.examples)
}

/// Like [`load_examples`], but also returns the skipped files.
pub fn load_report(
    source: &dyn ExampleSource,
    posters: &dyn PosterLookup,
    config: &GalleryConfig,
) -> Result<LoadReport, LoadError> {
    let paths = source.list()?;

    let outcomes: Vec<Result<Built, Skipped>> = paths
        .par_iter()
        .map(|path| load_one(path, source, posters, config))
        .collect();

    let mut report = LoadReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(built) => {
                report.examples.push(built.example);
                report.id_mismatches.extend(built.mismatch);
            }
            Err(skipped) => {
                debug!(path = %skipped.path.display(), reason = %skipped.reason, "skipping example file");
                report.skipped.push(skipped);
            }
        }
    }

    sort_examples(&mut report.examples)?;

    info!(
        loaded = report.examples.len(),
        skipped = report.skipped.len(),
        "loaded examples"
    );
    Ok(report)
}

/// Load examples from a site root, reading `gallery.toml` if present.
pub fn load(site_root: &Path) -> Result<LoadReport, LoadError> {
    let config = config::load_config(site_root)?;
    load_with_config(site_root, &config)
}

/// Load examples using the filesystem layout described by `config`.
pub fn load_with_config(site_root: &Path, config: &GalleryConfig) -> Result<LoadReport, LoadError> {
    let source = FsSource::with_exclusions(
        config.examples_dir(site_root),
        config.exclude_dirs.clone(),
    );
    let posters = LocalPosters::new(config.posters_path(site_root));
    load_report(&source, &posters, config)
}

/// Sort records by title (root-locale collation), then id.
pub fn sort_examples(examples: &mut [CodeExample]) -> Result<(), CollationError> {
    let collator = TitleCollator::new()?;
    examples.sort_by(|a, b| {
        collator
            .compare(&a.title, &b.title)
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(())
}

fn load_one(
    path: &Path,
    source: &dyn ExampleSource,
    posters: &dyn PosterLookup,
    config: &GalleryConfig,
) -> Result<Built, Skipped> {
    let skip = |reason: SkipReason| Skipped {
        path: path.to_path_buf(),
        reason,
    };

    let text = source
        .read(path)
        .map_err(|e| skip(SkipReason::Read(e.to_string())))?;
    let raw: Value =
        serde_yaml::from_str(&text).map_err(|e| skip(SkipReason::Parse(e.to_string())))?;

    let id = normalize::slug_from_path(path);
    let example = build_example(&id, &raw, posters, config).map_err(skip)?;

    let mismatch = normalize::declared_id(&raw)
        .filter(|declared| *declared != id)
        .map(|declared| IdMismatch {
            path: path.to_path_buf(),
            declared: declared.to_string(),
            id: id.clone(),
        });

    Ok(Built { example, mismatch })
}

/// Assemble one record from a parsed document.
///
/// Applies the title/prompt gate first; no partial record is ever built.
pub fn build_example(
    id: &str,
    raw: &Value,
    posters: &dyn PosterLookup,
    config: &GalleryConfig,
) -> Result<CodeExample, SkipReason> {
    if !raw.is_mapping() {
        return Err(SkipReason::NotAMapping);
    }
    let title = normalize::resolve_title(raw).ok_or(SkipReason::MissingTitle)?;
    let prompt = normalize::resolve_prompt(raw).ok_or(SkipReason::MissingPrompt)?;

    Ok(CodeExample {
        id: id.to_string(),
        title,
        prompt,
        poster: poster::resolve_poster(id, posters, config),
        iframe_url: poster::iframe_url(id, config),
        tags: normalize::tags(raw).unwrap_or_default(),
        camera: normalize::device_flag(raw, "camera"),
        microphone: normalize::device_flag(raw, "microphone"),
    })
}
