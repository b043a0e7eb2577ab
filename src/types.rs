//! Canonical record handed to the renderer.
//!
//! This is the only shape that leaves the crate. It is serialized as JSON for
//! the `export` command and must stay stable for whatever consumes it.

use serde::{Deserialize, Serialize};

/// A fully normalized code example.
///
/// Every field except `camera` and `microphone` is always present. The two
/// device flags are three-state: `Some(true)`, `Some(false)`, or `None` when
/// the source file did not declare a boolean. `None` is omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    /// Slug derived from the source file name (`demo.yaml` → `demo`)
    pub id: String,
    pub title: String,
    pub prompt: String,
    /// Root-relative local poster path, or the remote CDN URL
    pub poster: String,
    pub iframe_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microphone: Option<bool>,
}

impl CodeExample {
    /// Whether the poster points at a file under the site's public directory.
    ///
    /// Remote posters are always absolute `http(s)` URLs, so a root-relative
    /// path can only be local.
    pub fn has_local_poster(&self) -> bool {
        self.poster.starts_with('/')
    }
}
