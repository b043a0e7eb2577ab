//! CLI output formatting.
//!
//! Output is information-first: each example leads with its positional index
//! and title, with id, poster source, tags, and device requirements shown as
//! indented context lines.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Examples
//! 001 Snake Game
//!     Id: snake-game
//!     Poster: /posters/snake-game.png (local)
//!     Tags: games, canvas
//!     Devices: camera
//!     Prompt: Build a classic snake game with...
//!
//! 2 examples
//! ```
//!
//! ## Check
//!
//! The list output, followed by what the loader left out:
//!
//! ```text
//! Skipped
//!     drafts/broken.yaml: invalid YAML: ...
//!
//! Id mismatches
//!     todo.yaml: declares id `todo-app`, using `todo`
//!
//! 2 examples, 1 skipped
//! ```
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::load::LoadReport;
use crate::types::CodeExample;
use std::path::Path;

const PROMPT_PREVIEW: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// First line of a prompt, truncated for display.
fn prompt_preview(prompt: &str) -> String {
    truncate(prompt.lines().next().unwrap_or("").trim(), PROMPT_PREVIEW)
}

fn devices_line(example: &CodeExample) -> Option<String> {
    let devices: Vec<&str> = [
        ("camera", example.camera),
        ("microphone", example.microphone),
    ]
    .into_iter()
    .filter(|(_, flag)| *flag == Some(true))
    .map(|(name, _)| name)
    .collect();

    if devices.is_empty() {
        None
    } else {
        Some(devices.join(", "))
    }
}

/// Display a path relative to `root` when it lives below it.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// List
// ============================================================================

/// Format the example listing.
pub fn format_list_output(examples: &[CodeExample]) -> Vec<String> {
    let mut lines = vec!["Examples".to_string()];
    let ctx = indent(1);

    for (i, example) in examples.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), example.title));
        lines.push(format!("{ctx}Id: {}", example.id));

        let origin = if example.has_local_poster() { "local" } else { "remote" };
        lines.push(format!("{ctx}Poster: {} ({origin})", example.poster));

        if !example.tags.is_empty() {
            lines.push(format!("{ctx}Tags: {}", example.tags.join(", ")));
        }
        if let Some(devices) = devices_line(example) {
            lines.push(format!("{ctx}Devices: {devices}"));
        }
        lines.push(format!("{ctx}Prompt: {}", prompt_preview(&example.prompt)));
    }

    lines.push(String::new());
    lines.push(plural(examples.len(), "example"));
    lines
}

/// Print the example listing to stdout.
pub fn print_list_output(examples: &[CodeExample]) {
    for line in format_list_output(examples) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the check report: listing, skipped files, and id mismatches.
///
/// Paths are shown relative to `examples_root`.
pub fn format_check_output(report: &LoadReport, examples_root: &Path) -> Vec<String> {
    let mut lines = format_list_output(&report.examples);
    // Replace the list summary with the check summary
    lines.pop();
    let ctx = indent(1);

    if !report.skipped.is_empty() {
        lines.push("Skipped".to_string());
        let mut skipped: Vec<_> = report.skipped.iter().collect();
        skipped.sort_by(|a, b| a.path.cmp(&b.path));
        for s in skipped {
            lines.push(format!("{ctx}{}: {}", relative(&s.path, examples_root), s.reason));
        }
        lines.push(String::new());
    }

    if !report.id_mismatches.is_empty() {
        lines.push("Id mismatches".to_string());
        for m in &report.id_mismatches {
            lines.push(format!(
                "{ctx}{}: declares id `{}`, using `{}`",
                relative(&m.path, examples_root),
                m.declared,
                m.id
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "{}, {} skipped",
        plural(report.examples.len(), "example"),
        report.skipped.len()
    ));
    lines
}

/// Print the check report to stdout.
pub fn print_check_output(report: &LoadReport, examples_root: &Path) {
    for line in format_check_output(report, examples_root) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{IdMismatch, SkipReason, Skipped};
    use std::path::PathBuf;

    fn example(id: &str, title: &str) -> CodeExample {
        CodeExample {
            id: id.to_string(),
            title: title.to_string(),
            prompt: "Build it".to_string(),
            poster: format!("https://cdn.example.com/{id}.png"),
            iframe_url: format!("/{id}"),
            tags: vec![],
            camera: None,
            microphone: None,
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Short text", 40), "Short text");
        assert_eq!(truncate("", 40), "");
    }

    #[test]
    fn truncate_long_text() {
        let text = "a".repeat(50);
        assert_eq!(truncate(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
    }

    #[test]
    fn prompt_preview_uses_first_line() {
        assert_eq!(prompt_preview("  First line  \nsecond"), "First line");
    }

    #[test]
    fn list_shows_header_and_context() {
        let mut snake = example("snake", "Snake");
        snake.poster = "/posters/snake.png".to_string();
        snake.tags = vec!["games".to_string(), "canvas".to_string()];
        snake.camera = Some(true);
        snake.microphone = Some(false);

        let lines = format_list_output(&[snake]);
        assert_eq!(
            lines,
            vec![
                "Examples",
                "001 Snake",
                "    Id: snake",
                "    Poster: /posters/snake.png (local)",
                "    Tags: games, canvas",
                "    Devices: camera",
                "    Prompt: Build it",
                "",
                "1 example",
            ]
        );
    }

    #[test]
    fn list_omits_empty_tags_and_devices() {
        let lines = format_list_output(&[example("a", "A"), example("b", "B")]);
        assert!(!lines.iter().any(|l| l.contains("Tags:")));
        assert!(!lines.iter().any(|l| l.contains("Devices:")));
        assert!(lines.iter().any(|l| l.ends_with("(remote)")));
        assert_eq!(lines.last().unwrap(), "2 examples");
    }

    #[test]
    fn check_lists_skips_and_mismatches() {
        let root = PathBuf::from("/repo");
        let report = LoadReport {
            examples: vec![example("todo", "Todo")],
            skipped: vec![Skipped {
                path: root.join("drafts/bad.yaml"),
                reason: SkipReason::MissingPrompt,
            }],
            id_mismatches: vec![IdMismatch {
                path: root.join("todo.yaml"),
                declared: "todo-app".to_string(),
                id: "todo".to_string(),
            }],
        };

        let lines = format_check_output(&report, &root);
        assert!(lines.contains(&"Skipped".to_string()));
        assert!(lines.contains(&"    drafts/bad.yaml: no string `prompt`".to_string()));
        assert!(lines.contains(&"    todo.yaml: declares id `todo-app`, using `todo`".to_string()));
        assert_eq!(lines.last().unwrap(), "1 example, 1 skipped");
    }

    #[test]
    fn check_without_problems_has_no_extra_sections() {
        let report = LoadReport {
            examples: vec![example("a", "A")],
            ..LoadReport::default()
        };
        let lines = format_check_output(&report, Path::new("/repo"));
        assert!(!lines.contains(&"Skipped".to_string()));
        assert!(!lines.contains(&"Id mismatches".to_string()));
        assert_eq!(lines.last().unwrap(), "1 example, 0 skipped");
    }
}
