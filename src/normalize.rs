//! Field normalization for raw example documents.
//!
//! Example files are untrusted YAML. Every field is read from a loosely typed
//! [`serde_yaml::Value`] and normalized on its own, without coercion:
//!
//! - **Title**: `title` → `name` (legacy) → none. First non-empty string wins.
//! - **Prompt**: `prompt` if it is a non-empty string.
//! - **Tags**: string elements of a sequence, in order. Anything that is not a
//!   sequence is unspecified rather than an empty list.
//! - **Device flags** (`camera`, `microphone`): only real booleans count.
//!   The string `"true"` is not a boolean.
//!
//! An `id` key inside the document is tolerated but never consulted; the slug
//! always comes from the file name (see [`slug_from_path`]).

use serde_yaml::Value;
use std::path::Path;

/// Keys consulted for the display title, in priority order.
const TITLE_KEYS: &[&str] = &["title", "name"];

/// Return the value under `key` if `raw` is a mapping that has it.
fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.as_mapping().and_then(|m| m.get(key))
}

/// Return the value as a string slice if it is a non-empty YAML string.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Resolve the display title from the ordered key preference list.
///
/// A `title` that is missing, empty, or not a string falls through to `name`.
pub fn resolve_title(raw: &Value) -> Option<String> {
    TITLE_KEYS
        .iter()
        .find_map(|key| non_empty_str(field(raw, key)))
        .map(String::from)
}

/// Resolve the prompt text. Must be a non-empty string.
pub fn resolve_prompt(raw: &Value) -> Option<String> {
    non_empty_str(field(raw, "prompt")).map(String::from)
}

/// The `id` declared inside the document, if any. Informational only.
pub fn declared_id(raw: &Value) -> Option<&str> {
    field(raw, "id").and_then(Value::as_str)
}

/// Extract the string elements of a list-like value.
///
/// ```text
/// ["a", 2, "b", null]  → Some(["a", "b"])
/// []                   → Some([])
/// "not-a-list"         → None
/// null / absent        → None
/// ```
pub fn normalize_string_array(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Sequence(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        ),
        _ => None,
    }
}

/// Pass a value through only if it is exactly a boolean.
pub fn normalize_boolean(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Read the `tags` field of a raw document.
pub fn tags(raw: &Value) -> Option<Vec<String>> {
    normalize_string_array(field(raw, "tags"))
}

/// Read a device flag (`camera`, `microphone`) of a raw document.
pub fn device_flag(raw: &Value, key: &str) -> Option<bool> {
    normalize_boolean(field(raw, key))
}

/// Derive the example slug from a file path.
///
/// Strips a trailing `.yaml` or `.yml` extension, matched case-insensitively.
/// Any other extension is left in place.
///
/// - `examples/snake-game.yaml` → `snake-game`
/// - `Todo.YML` → `Todo`
/// - `notes.v2.yaml` → `notes.v2`
pub fn slug_from_path(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();

    for ext in [".yaml", ".yml"] {
        let Some(split) = base.len().checked_sub(ext.len()) else {
            continue;
        };
        if base.is_char_boundary(split) && base[split..].eq_ignore_ascii_case(ext) {
            return base[..split].to_string();
        }
    }
    base
}
