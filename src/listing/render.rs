//! Short and long rendering of listed entries.

use colored::Colorize;
use tracing::warn;

use super::columns::Column;
use super::entry::{DirectoryEntry, EntryKind};

/// Display form of an entry name.
///
/// With `color` set, directories are blue, symlinks cyan followed by
/// `-> <target>`, and executable files green. Everything else, and every
/// name when `color` is off, is the bare name.
#[must_use]
pub fn decorated_name(entry: &DirectoryEntry, color: bool) -> String {
    let name = entry.name();
    if !color {
        return name.to_string();
    }

    match entry.kind() {
        EntryKind::Directory => name.blue().bold().to_string(),
        EntryKind::Symlink => match entry.link_target() {
            Some(target) => format!(
                "{} -> {}",
                name.cyan(),
                target.display().to_string().magenta()
            ),
            None => name.cyan().to_string(),
        },
        EntryKind::File if entry.metadata().is_some_and(|m| m.executable) => {
            name.green().to_string()
        }
        _ => name.to_string(),
    }
}

/// One name per line, no header.
///
/// Metadata is only consulted when `color` is set and an entry needs it
/// to decide its color.
#[must_use]
pub fn render_short(entries: &[DirectoryEntry], color: bool) -> Vec<String> {
    entries.iter().map(|e| decorated_name(e, color)).collect()
}

/// Header row followed by one row per entry.
///
/// Entries whose metadata cannot be read are skipped with a warning.
#[must_use]
pub fn render_long(entries: &[DirectoryEntry], columns: &[Box<dyn Column>], color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| c.pad(c.header()))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for entry in entries {
        let Some(metadata) = entry.metadata() else {
            warn!(path = %entry.path().display(), "skipping entry without metadata");
            continue;
        };

        let mut parts: Vec<String> = columns
            .iter()
            .map(|c| c.pad(&c.value(entry, metadata)))
            .collect();

        if color && let Some(last) = parts.last_mut() {
            *last = decorated_name(entry, true);
        }
        lines.push(parts.join(" "));
    }

    lines
}
