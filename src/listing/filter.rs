//! Entry filtering: hidden files, extension literals and tags.

use super::entry::DirectoryEntry;
use super::error::FilterError;
use super::options::{EntryFilter, ListingOptions};
use crate::tags::TagSource;

/// Keeps the entries that pass `options`, in their original order.
///
/// Hidden entries are dropped unless `show_hidden` is set. An extension
/// filter keeps names whose last extension equals the literal exactly
/// (case-sensitive). A tag filter asks `tags` for each remaining entry,
/// keyed by the entry's path, and keeps those carrying the tag.
///
/// # Errors
///
/// Returns `FilterError::TagLookup` on the first failed tag lookup; no
/// partial result is returned.
pub fn filter_entries(
    entries: Vec<DirectoryEntry>,
    options: &ListingOptions,
    tags: &dyn TagSource,
) -> Result<Vec<DirectoryEntry>, FilterError> {
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        if !options.show_hidden && entry.is_hidden() {
            continue;
        }

        let keep = match &options.filter {
            EntryFilter::None => true,
            EntryFilter::Extension(ext) => entry.extension() == Some(ext.as_str()),
            EntryFilter::Tag(tag) => {
                let identifier = entry.path().to_string_lossy();
                let entry_tags = tags.lookup(&identifier).map_err(|source| FilterError::TagLookup {
                    identifier: identifier.to_string(),
                    source,
                })?;
                entry_tags.iter().any(|t| t == tag)
            }
        };

        if keep {
            kept.push(entry);
        }
    }

    Ok(kept)
}
