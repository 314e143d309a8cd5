//! CLI output formatting for library commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every comic is its semantic identity (positional index, title, panel
//! count, rating) with storage details shown as secondary context via
//! indented `Id:` / `Cover:` lines.
//!
//! # Entity Display Contract
//!
//! Every comic follows a consistent two-level pattern across all commands:
//!
//! 1. **Header line**: positional index + title + panel/rating summary
//! 2. **Context lines**: indented `Id:`, `Imported:`, `Published:`, `Cover:`
//!
//! ```text
//! Comics
//! 001 Dawn Patrol (6 panels, rated 4/5, favorite)
//!     Id: 20260805T101530123Z
//!     Imported: 2026-08-05T10:15:30Z
//! 002 Moon Saga (6 panels)
//!     Id: 20260803T090211554Z
//!     Imported: 2026-08-03T09:02:11Z
//!
//! 2 comics, 1 favorite
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::store::Comic;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line: positional index + title + parenthesized summary.
fn comic_header(index: usize, comic: &Comic) -> String {
    let mut summary = format!(
        "{} panel{}",
        comic.panels.len(),
        if comic.panels.len() == 1 { "" } else { "s" }
    );
    if comic.rating > 0 {
        summary.push_str(&format!(", rated {}/5", comic.rating));
    }
    if comic.is_favorite {
        summary.push_str(", favorite");
    }
    format!("{} {} ({})", format_index(index), comic.title, summary)
}

/// Indented context lines shared by list and show output.
fn comic_context(comic: &Comic) -> Vec<String> {
    let mut lines = vec![
        format!("{}Id: {}", indent(1), comic.id),
        format!("{}Imported: {}", indent(1), comic.created_at),
    ];
    if let Some(date) = &comic.publish_date {
        lines.push(format!("{}Published: {}", indent(1), date));
    }
    lines
}

/// Format the result of an import.
pub fn format_import(comic: &Comic) -> Vec<String> {
    let mut lines = vec![format!("Imported {}", comic.title)];
    lines.extend(comic_context(comic));
    lines.push(format!(
        "{}Panels: {}",
        indent(1),
        comic.panels.len()
    ));
    match &comic.cover {
        Some(cover) => lines.push(format!("{}Cover: {}", indent(1), cover)),
        None => lines.push(format!("{}Cover: (placeholder)", indent(1))),
    }
    lines
}

/// Format the library listing, newest first.
pub fn format_list(comics: &[Comic]) -> Vec<String> {
    if comics.is_empty() {
        return vec!["No comics in the library".to_string()];
    }

    let mut lines = vec!["Comics".to_string()];
    for (pos, comic) in comics.iter().enumerate() {
        lines.push(comic_header(pos + 1, comic));
        lines.extend(comic_context(comic));
    }

    let favorites = comics.iter().filter(|c| c.is_favorite).count();
    lines.push(String::new());
    lines.push(format!(
        "{} comic{}, {} favorite{}",
        comics.len(),
        if comics.len() == 1 { "" } else { "s" },
        favorites,
        if favorites == 1 { "" } else { "s" },
    ));
    lines
}

/// Format one comic in full, panel artifacts included.
pub fn format_show(comic: &Comic) -> Vec<String> {
    let mut lines = vec![comic_header(1, comic)];
    lines.extend(comic_context(comic));
    match &comic.cover {
        Some(cover) => lines.push(format!("{}Cover: {}", indent(1), cover)),
        None => lines.push(format!("{}Cover: (placeholder)", indent(1))),
    }
    lines.push(format!("{}Panels:", indent(1)));
    for name in &comic.panels {
        lines.push(format!("{}{}", indent(2), name));
    }
    lines
}

pub fn print_import(comic: &Comic) {
    for line in format_import(comic) {
        println!("{line}");
    }
}

pub fn print_list(comics: &[Comic]) {
    for line in format_list(comics) {
        println!("{line}");
    }
}

pub fn print_show(comic: &Comic) {
    for line in format_show(comic) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comic() -> Comic {
        Comic {
            id: "20260805T101530123Z".to_string(),
            title: "Dawn Patrol".to_string(),
            publish_date: None,
            is_favorite: false,
            rating: 0,
            created_at: "2026-08-05T10:15:30Z".to_string(),
            source_hash: "abc".to_string(),
            panels: (0..6).map(|i| format!("panel-{i:03}.jpg")).collect(),
            cover: Some("cover.jpg".to_string()),
        }
    }

    #[test]
    fn header_shows_index_title_and_panel_count() {
        let lines = format_list(&[sample_comic()]);
        assert_eq!(lines[1], "001 Dawn Patrol (6 panels)");
    }

    #[test]
    fn header_includes_rating_and_favorite() {
        let mut comic = sample_comic();
        comic.rating = 4;
        comic.is_favorite = true;
        let lines = format_list(&[comic]);
        assert_eq!(lines[1], "001 Dawn Patrol (6 panels, rated 4/5, favorite)");
    }

    #[test]
    fn list_ends_with_summary_counts() {
        let mut favorite = sample_comic();
        favorite.is_favorite = true;
        let lines = format_list(&[sample_comic(), favorite]);
        assert_eq!(lines.last().unwrap(), "2 comics, 1 favorite");
    }

    #[test]
    fn empty_list_has_placeholder_line() {
        assert_eq!(format_list(&[]), vec!["No comics in the library"]);
    }

    #[test]
    fn import_output_names_cover() {
        let lines = format_import(&sample_comic());
        assert_eq!(lines[0], "Imported Dawn Patrol");
        assert!(lines.contains(&"    Cover: cover.jpg".to_string()));
    }

    #[test]
    fn import_output_without_cover_shows_placeholder() {
        let mut comic = sample_comic();
        comic.cover = None;
        let lines = format_import(&comic);
        assert!(lines.contains(&"    Cover: (placeholder)".to_string()));
    }

    #[test]
    fn show_lists_every_panel_artifact() {
        let lines = format_show(&sample_comic());
        assert!(lines.contains(&"        panel-000.jpg".to_string()));
        assert!(lines.contains(&"        panel-005.jpg".to_string()));
    }

    #[test]
    fn published_line_present_only_when_set() {
        let mut comic = sample_comic();
        assert!(!format_show(&comic).iter().any(|l| l.contains("Published")));
        comic.publish_date = Some("1986-09".to_string());
        assert!(
            format_show(&comic)
                .iter()
                .any(|l| l == "    Published: 1986-09")
        );
    }
}
