//! Output formatting utilities

use crate::domain::Entry;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[&Entry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} {}  {}  {}\n",
            star_marker(entry),
            entry.created_at.format(date_format),
            entry.short_id(),
            entry.title
        ));
    }
    output
}

/// Format a single entry with its full text
pub fn format_entry(entry: &Entry, date_format: &str) -> String {
    let mut output = format!(
        "{} {}\n{}\nid: {}\n",
        star_marker(entry),
        entry.title,
        entry.created_at.format(date_format),
        entry.id
    );
    if !entry.body.is_empty() {
        output.push('\n');
        output.push_str(&entry.body);
        output.push('\n');
    }
    output
}

fn star_marker(entry: &Entry) -> char {
    if entry.starred {
        '*'
    } else {
        ' '
    }
}
