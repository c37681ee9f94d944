//! Entry ordering.

use std::cmp::Ordering;

use super::entry::DirectoryEntry;
use super::options::SortKey;

/// Sorts entries by `key`, in place.
///
/// The sort is stable and `reverse` flips the comparison rather than the
/// finished sequence, so entries with equal keys keep their read order in
/// both directions. Missing metadata counts as size `0` and the epoch.
pub fn sort_entries(entries: &mut [DirectoryEntry], key: SortKey, reverse: bool) {
    entries.sort_by(|a, b| {
        let ord = compare_by_key(a, b, key);
        if reverse { ord.reverse() } else { ord }
    });
}

fn compare_by_key(a: &DirectoryEntry, b: &DirectoryEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name().as_bytes().cmp(b.name().as_bytes()),
        SortKey::Size => a.size().cmp(&b.size()),
        SortKey::ModifiedTime => a.modified().cmp(&b.modified()),
    }
}
