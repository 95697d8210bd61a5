//! Tree Utilities
//!
//! Helper functions for rendering category rows.

use category_tree::{CategoryStore, TreeRow};

/// Split `text` into `(segment, is_match)` pairs for highlighting `query`.
///
/// Matching is case-insensitive. Text with characters whose lowercase form
/// is longer than one char is returned unhighlighted.
pub fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // Byte offset of each char, plus the end of the string
    let mut offsets = Vec::new();
    let mut folded = Vec::new();
    for (idx, ch) in text.char_indices() {
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(c), None) => {
                offsets.push(idx);
                folded.push(c);
            }
            _ => return vec![(text.to_string(), false)],
        }
    }
    offsets.push(text.len());

    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            if start < i {
                segments.push((text[offsets[start]..offsets[i]].to_string(), false));
            }
            segments.push((text[offsets[i]..offsets[i + needle.len()]].to_string(), true));
            i += needle.len();
            start = i;
        } else {
            i += 1;
        }
    }
    if start < folded.len() {
        segments.push((text[offsets[start]..].to_string(), false));
    }
    segments
}

/// "also under X, Y" for a multi-parent row, naming the parents other than
/// the one this placement sits under.
pub fn also_under_label(store: &CategoryStore, row: &TreeRow) -> Option<String> {
    let placed_under = row.path.len().checked_sub(2).map(|i| row.path[i]);
    let others: Vec<&str> = store
        .parents_of(row.category_id())
        .into_iter()
        .filter(|parent| Some(parent.id) != placed_under)
        .map(|parent| parent.name.as_str())
        .collect();

    if others.is_empty() {
        None
    } else {
        Some(format!("also under {}", others.join(", ")))
    }
}

/// Confirmation text for deleting a category placed under `parent_count` parents
pub fn delete_prompt(name: &str, parent_count: usize) -> String {
    if parent_count > 1 {
        format!("Delete '{}'? It is removed from all {} parents.", name, parent_count)
    } else {
        format!("Delete '{}'?", name)
    }
}
