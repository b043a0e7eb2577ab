//! Poster resolution.
//!
//! Each example gets exactly one poster string. A local file at
//! `<public>/<posters_dir>/<id>.png` wins and is referenced root-relative;
//! otherwise the poster is the CDN URL `<cdn_base_url>/<id>.png`. The CDN URL
//! is only formatted, never fetched.
//!
//! The existence probe sits behind [`PosterLookup`] so the loader can be
//! exercised without a real `public/` directory.

use crate::config::GalleryConfig;
use std::path::PathBuf;

/// Answers whether a local poster exists for an example id.
pub trait PosterLookup: Sync {
    fn has_local_poster(&self, id: &str) -> bool;
}

/// Filesystem-backed lookup over a posters directory.
///
/// Probe failures (permissions, races, broken symlinks) read as "absent".
#[derive(Debug, Clone)]
pub struct LocalPosters {
    dir: PathBuf,
}

impl LocalPosters {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }
}

impl PosterLookup for LocalPosters {
    fn has_local_poster(&self, id: &str) -> bool {
        self.path_for(id).try_exists().unwrap_or(false)
    }
}

/// Resolve the poster reference for `id`. Performs one probe, uncached.
pub fn resolve_poster(id: &str, posters: &dyn PosterLookup, config: &GalleryConfig) -> String {
    if posters.has_local_poster(id) {
        format!("/{}/{}.png", config.posters_dir, id)
    } else {
        remote_poster_url(id, config)
    }
}

/// The CDN fallback URL for `id`.
pub fn remote_poster_url(id: &str, config: &GalleryConfig) -> String {
    format!("{}/{}.png", config.cdn_base_url, id)
}

/// The iframe URL for `id`: base path and id concatenated as-is.
pub fn iframe_url(id: &str, config: &GalleryConfig) -> String {
    format!("{}{}", config.iframe_base_url, id)
}
