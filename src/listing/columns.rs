//! Long-format columns.
//!
//! Each column knows its header, its width and how to turn one entry's
//! metadata into display text. A long listing is the ordered sequence
//! returned by [`default_columns`]; the trailing name column is unbounded
//! and is the only one the renderer decorates.

use byte_unit::{Byte, UnitType};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use tracing::warn;

use super::entry::{DirectoryEntry, EntryKind, EntryMetadata};

/// Default timestamp layout of the modified column.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Padding side for a bounded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One field of a long listing.
pub trait Column {
    fn header(&self) -> &str;

    /// Display width; `0` means unbounded.
    fn width(&self) -> usize;

    fn align(&self) -> Align {
        Align::Left
    }

    /// Display text of this field for one entry.
    fn value(&self, entry: &DirectoryEntry, metadata: &EntryMetadata) -> String;

    /// Pad `text` to the column width. Longer text is never truncated.
    fn pad(&self, text: &str) -> String {
        let width = self.width();
        match (width, self.align()) {
            (0, _) => text.to_string(),
            (_, Align::Left) => format!("{text:<width$}"),
            (_, Align::Right) => format!("{text:>width$}"),
        }
    }
}

/// The fixed column set: permissions, owner, group, size, modified, name.
#[must_use]
pub fn default_columns(time_format: &str) -> Vec<Box<dyn Column>> {
    vec![
        Box::new(PermissionsColumn),
        Box::new(OwnerColumn::default()),
        Box::new(GroupColumn::default()),
        Box::new(SizeColumn),
        Box::new(ModifiedColumn::new(time_format)),
        Box::new(NameColumn),
    ]
}

/// Format a byte count with binary units, e.g. `1.5 KB`.
///
/// Counts below 1024 print as `<n> B`; larger counts use the largest unit
/// that keeps the value below 1024, with one decimal.
#[must_use]
pub fn humanize_size(size: u64) -> String {
    if size < 1024 {
        return format!("{size} B");
    }

    let adjusted = Byte::from_u64(size).get_appropriate_unit(UnitType::Binary);
    // KiB, MiB, ... shown as KB, MB, ...
    let prefix = adjusted.get_unit().to_string().chars().next().unwrap_or('K');
    format!("{:.1} {prefix}B", adjusted.get_value())
}

/// ls-style permission string such as `drwxr-xr-x`.
#[must_use]
pub fn permission_string(kind: EntryKind, mode: u32) -> String {
    let mut perms = String::with_capacity(10);
    perms.push(match kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::File => '-',
        EntryKind::Other => '?',
    });

    let special = [(0o4000, 0o100), (0o2000, 0o010), (0o1000, 0o001)];
    for (i, shift) in [6, 3, 0].into_iter().enumerate() {
        let bits = (mode >> shift) & 0o7;
        perms.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if bits & 0o2 != 0 { 'w' } else { '-' });

        let (special_bit, exec_bit) = special[i];
        let exec = mode & exec_bit != 0;
        let marker = if i == 2 { 't' } else { 's' };
        perms.push(match (mode & special_bit != 0, exec) {
            (true, true) => marker,
            (true, false) => marker.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    perms
}

pub struct PermissionsColumn;

impl Column for PermissionsColumn {
    fn header(&self) -> &str {
        "Permissions"
    }

    fn width(&self) -> usize {
        11
    }

    fn value(&self, entry: &DirectoryEntry, metadata: &EntryMetadata) -> String {
        permission_string(entry.kind(), metadata.mode)
    }
}

#[derive(Default)]
pub struct OwnerColumn {
    #[cfg(unix)]
    users: users::UsersCache,
}

impl Column for OwnerColumn {
    fn header(&self) -> &str {
        "Owner"
    }

    fn width(&self) -> usize {
        8
    }

    #[cfg(unix)]
    fn value(&self, _entry: &DirectoryEntry, metadata: &EntryMetadata) -> String {
        use users::Users;
        self.users
            .get_user_by_uid(metadata.uid)
            .map_or_else(|| metadata.uid.to_string(), |u| u.name().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn value(&self, _entry: &DirectoryEntry, _metadata: &EntryMetadata) -> String {
        "user".to_string()
    }
}

#[derive(Default)]
pub struct GroupColumn {
    #[cfg(unix)]
    users: users::UsersCache,
}

impl Column for GroupColumn {
    fn header(&self) -> &str {
        "Group"
    }

    fn width(&self) -> usize {
        8
    }

    #[cfg(unix)]
    fn value(&self, _entry: &DirectoryEntry, metadata: &EntryMetadata) -> String {
        use users::Groups;
        self.users
            .get_group_by_gid(metadata.gid)
            .map_or_else(|| metadata.gid.to_string(), |g| g.name().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn value(&self, _entry: &DirectoryEntry, _metadata: &EntryMetadata) -> String {
        "user".to_string()
    }
}

pub struct SizeColumn;

impl Column for SizeColumn {
    fn header(&self) -> &str {
        "Size"
    }

    fn width(&self) -> usize {
        9
    }

    fn align(&self) -> Align {
        Align::Right
    }

    fn value(&self, _entry: &DirectoryEntry, metadata: &EntryMetadata) -> String {
        humanize_size(metadata.size)
    }
}

/// `true` if `format` is a chrono format string without invalid specifiers.
#[must_use]
pub fn is_valid_time_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

pub struct ModifiedColumn {
    format: String,
}

impl ModifiedColumn {
    /// Column using `format`, or the default layout if `format` is invalid.
    #[must_use]
    pub fn new(format: &str) -> Self {
        let format = if is_valid_time_format(format) {
            format
        } else {
            warn!(format, "invalid time format, using default");
            DEFAULT_TIME_FORMAT
        };
        Self {
            format: format.to_string(),
        }
    }
}

impl Column for ModifiedColumn {
    fn header(&self) -> &str {
        "Modified"
    }

    fn width(&self) -> usize {
        20
    }

    fn value(&self, _entry: &DirectoryEntry, metadata: &EntryMetadata) -> String {
        DateTime::<Local>::from(metadata.modified)
            .format(&self.format)
            .to_string()
    }
}

pub struct NameColumn;

impl Column for NameColumn {
    fn header(&self) -> &str {
        "Name"
    }

    fn width(&self) -> usize {
        0
    }

    fn value(&self, entry: &DirectoryEntry, _metadata: &EntryMetadata) -> String {
        entry.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn metadata(size: u64, mode: u32) -> EntryMetadata {
        EntryMetadata {
            size,
            modified: SystemTime::UNIX_EPOCH,
            mode,
            uid: u32::MAX - 7,
            gid: u32::MAX - 7,
            executable: mode & 0o111 != 0,
        }
    }

    #[test]
    fn test_humanize_size() {
        assert_eq!(humanize_size(0), "0 B");
        assert_eq!(humanize_size(1023), "1023 B");
        assert_eq!(humanize_size(1024), "1.0 KB");
        assert_eq!(humanize_size(1536), "1.5 KB");
        assert_eq!(humanize_size(1_048_576), "1.0 MB");
        assert_eq!(humanize_size(1_572_864), "1.5 MB");
        assert_eq!(humanize_size(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(humanize_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_permission_strings() {
        assert_eq!(permission_string(EntryKind::File, 0o644), "-rw-r--r--");
        assert_eq!(permission_string(EntryKind::Directory, 0o755), "drwxr-xr-x");
        assert_eq!(permission_string(EntryKind::Symlink, 0o777), "lrwxrwxrwx");
        assert_eq!(permission_string(EntryKind::File, 0o4755), "-rwsr-xr-x");
        assert_eq!(permission_string(EntryKind::Directory, 0o1777), "drwxrwxrwt");
        assert_eq!(permission_string(EntryKind::File, 0o2644), "-rw-r-Sr--");
    }

    #[test]
    fn test_padding() {
        assert_eq!(PermissionsColumn.pad("-rw-r--r--"), "-rw-r--r-- ");
        assert_eq!(SizeColumn.pad("10 B"), "     10 B");
        assert_eq!(NameColumn.pad("file.txt"), "file.txt");
        assert_eq!(SizeColumn.pad("1234567890 B"), "1234567890 B");
    }

    #[test]
    fn test_default_column_order() {
        let headers: Vec<String> = default_columns(DEFAULT_TIME_FORMAT)
            .iter()
            .map(|c| c.header().to_string())
            .collect();
        assert_eq!(headers, ["Permissions", "Owner", "Group", "Size", "Modified", "Name"]);
    }

    #[test]
    fn test_only_name_column_is_unbounded() {
        let columns = default_columns(DEFAULT_TIME_FORMAT);
        let (last, rest) = columns.split_last().unwrap();
        assert_eq!(last.width(), 0);
        assert!(rest.iter().all(|c| c.width() > 0));
    }

    #[test]
    fn test_unknown_owner_falls_back_to_id() {
        let entry = DirectoryEntry::new(PathBuf::from("a"), EntryKind::File);
        let meta = metadata(1, 0o644);
        let owner = OwnerColumn::default().value(&entry, &meta);
        if cfg!(unix) {
            assert_eq!(owner, (u32::MAX - 7).to_string());
        }
    }

    #[test]
    fn test_modified_uses_format() {
        let entry = DirectoryEntry::new(PathBuf::from("a"), EntryKind::File);
        let value = ModifiedColumn::new("%Y").value(&entry, &metadata(0, 0o644));
        // the epoch is 1969 or 1970 depending on the local offset
        assert!(value == "1970" || value == "1969");
    }

    #[test]
    fn test_invalid_time_format_falls_back() {
        assert!(is_valid_time_format(DEFAULT_TIME_FORMAT));
        assert!(!is_valid_time_format("%Q"));

        let entry = DirectoryEntry::new(PathBuf::from("a"), EntryKind::File);
        let value = ModifiedColumn::new("%Q").value(&entry, &metadata(0, 0o644));
        assert_eq!(value.len(), 19);
    }

    #[test]
    fn test_size_and_name_values() {
        let entry = DirectoryEntry::new(PathBuf::from("/d/a.txt"), EntryKind::File);
        let meta = metadata(2048, 0o644);
        assert_eq!(SizeColumn.value(&entry, &meta), "2.0 KB");
        assert_eq!(NameColumn.value(&entry, &meta), "a.txt");
    }
}
