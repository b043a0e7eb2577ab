//! # Example Gallery
//!
//! Loads a directory of YAML "code example" definitions into a sorted list of
//! render-ready records. Each file is one example; its file name is its id.
//!
//! ```text
//! snake-game.yaml            →  CodeExample {
//!   title: Snake Game               id: "snake-game",
//!   prompt: Build a snake game      title: "Snake Game",
//!   tags: [games]                   poster: "/posters/snake-game.png",
//!   camera: false                   iframeUrl: "/snake-game", ...
//!                                 }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Pipeline: list, parse, gate, assemble, sort; skip reporting |
//! | [`discover`] | `ExampleSource` seam and the recursive filesystem walker |
//! | [`normalize`] | Strict field extraction from untyped YAML, slug derivation |
//! | [`poster`] | `PosterLookup` seam, local-or-CDN poster and iframe URLs |
//! | [`collation`] | Root-locale (UCA) title comparison |
//! | [`config`] | `gallery.toml` loading, defaults, validation |
//! | [`types`] | The canonical [`types::CodeExample`] record |
//! | [`output`] | CLI text formatting |
//!
//! # Design Decisions
//!
//! ## Best-Effort Ingestion
//!
//! Example files are hand-edited and untrusted. A broken file must not hide
//! its siblings, so every file is loaded independently to either a record or a
//! skip reason, and only the inability to list the examples root is an error.
//!
//! ## No Coercion
//!
//! Optional fields keep their absence. `camera: "true"` is not a boolean and
//! stays unspecified; a `tags` scalar is not a one-element list. Both device
//! flags are `Option<bool>` so "not declared" never collapses into `false`.
//!
//! ## Explicit Layout
//!
//! Where examples live relative to the site, where posters live, and which
//! URLs get built are all named settings in [`config::GalleryConfig`].
//! The loader itself only talks to the [`discover::ExampleSource`] and
//! [`poster::PosterLookup`] traits, so tests run without a real tree.

pub mod collation;
pub mod config;
pub mod discover;
pub mod load;
pub mod normalize;
pub mod output;
pub mod poster;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
