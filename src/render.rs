//! Plain-text rendering for the command line.

use keycat_catalog::{Category, Shortcut, format_key_combination};

/// One line per shortcut: keys, id, name.
pub fn shortcut_line(shortcut: &Shortcut) -> String {
    format!(
        "{:<8} {:<32} {}",
        format_key_combination(&shortcut.keys),
        shortcut.id,
        shortcut.name
    )
}

pub fn shortcut_lines<'a>(shortcuts: impl IntoIterator<Item = &'a Shortcut>) -> String {
    shortcuts
        .into_iter()
        .map(shortcut_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full details for a single shortcut.
pub fn shortcut_details(shortcut: &Shortcut) -> String {
    let mut out = format!(
        "{} ({})\n  keys:        {}\n  category:    {}\n  description: {}\n  difficulty:  {}\n  frequency:   {}\n",
        shortcut.name,
        shortcut.id,
        format_key_combination(&shortcut.keys),
        shortcut.category,
        shortcut.description,
        shortcut.difficulty,
        shortcut.frequency,
    );
    if let Some(application) = &shortcut.application {
        out.push_str(&format!("  application: {application}\n"));
    }
    if !shortcut.tags.is_empty() {
        out.push_str(&format!("  tags:        {}\n", shortcut.tags.join(", ")));
    }
    out
}

pub fn category_line(category: &Category, count: usize) -> String {
    format!(
        "{:<16} {:<24} {:>3} shortcuts",
        category.id, category.name, count
    )
}
