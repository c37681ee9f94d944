//! Directory entry representation.

use std::cell::OnceCell;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Metadata snapshot of one entry, taken without following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub size: u64,
    pub modified: SystemTime,
    /// Permission bits (`0o777` plus setuid/setgid/sticky)
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub executable: bool,
}

impl EntryMetadata {
    /// Extract the fields used for sorting and rendering.
    #[must_use]
    pub fn from_metadata(name: &str, metadata: &Metadata) -> Self {
        let (mode, uid, gid) = ownership_and_mode(metadata);
        Self {
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            mode,
            uid,
            gid,
            executable: is_executable(name, mode),
        }
    }
}

#[cfg(unix)]
fn ownership_and_mode(metadata: &Metadata) -> (u32, u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (metadata.mode() & 0o7777, metadata.uid(), metadata.gid())
}

#[cfg(not(unix))]
fn ownership_and_mode(metadata: &Metadata) -> (u32, u32, u32) {
    let mode = if metadata.permissions().readonly() { 0o444 } else { 0o644 };
    (mode, 0, 0)
}

#[cfg(unix)]
fn is_executable(_name: &str, mode: u32) -> bool {
    mode & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(name: &str, _mode: u32) -> bool {
    name.ends_with(".exe") || name.ends_with(".bat")
}

/// A single entry read from a directory.
///
/// The name and kind come straight from the directory read. Metadata is
/// fetched on first use and then kept, so every stage of one listing sees
/// the same snapshot and short listings without color never stat at all.
#[derive(Debug)]
pub struct DirectoryEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    metadata: OnceCell<Option<EntryMetadata>>,
}

impl DirectoryEntry {
    /// Creates an entry whose metadata will be read from `path` when needed.
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            kind,
            metadata: OnceCell::new(),
        }
    }

    /// Creates an entry from a `read_dir` item.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the entry's file type cannot be determined.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> std::io::Result<Self> {
        let kind = EntryKind::from_file_type(entry.file_type()?);
        Ok(Self::new(entry.path(), kind))
    }

    /// Creates an entry with metadata already known.
    pub fn with_metadata(path: PathBuf, kind: EntryKind, metadata: Option<EntryMetadata>) -> Self {
        let entry = Self::new(path, kind);
        let _ = entry.metadata.set(metadata);
        entry
    }

    /// Full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name (last path component).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Extension including its dot, taken from the last `.` in the name.
    ///
    /// `archive.tar.gz` gives `.gz`, `.bashrc` gives `.bashrc` and a name
    /// without a dot has no extension.
    pub fn extension(&self) -> Option<&str> {
        self.name.rfind('.').map(|i| &self.name[i..])
    }

    /// Metadata snapshot, read on first call. `None` if it could not be read.
    pub fn metadata(&self) -> Option<&EntryMetadata> {
        self.metadata
            .get_or_init(|| match fs::symlink_metadata(&self.path) {
                Ok(metadata) => Some(EntryMetadata::from_metadata(&self.name, &metadata)),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "failed to read metadata");
                    None
                }
            })
            .as_ref()
    }

    /// Size in bytes, `0` when metadata is unavailable.
    pub fn size(&self) -> u64 {
        self.metadata().map_or(0, |m| m.size)
    }

    /// Last-modified time, the epoch when metadata is unavailable.
    pub fn modified(&self) -> SystemTime {
        self.metadata().map_or(SystemTime::UNIX_EPOCH, |m| m.modified)
    }

    /// Target of a symlink entry.
    pub fn link_target(&self) -> Option<PathBuf> {
        if self.kind != EntryKind::Symlink {
            return None;
        }
        fs::read_link(&self.path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_single(dir: &Path) -> DirectoryEntry {
        let item = fs::read_dir(dir).unwrap().next().unwrap().unwrap();
        DirectoryEntry::from_dir_entry(&item).unwrap()
    }

    #[test]
    fn entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test.txt"), "hello").unwrap();

        let entry = read_single(tmp.path());
        assert_eq!(entry.name(), "test.txt");
        assert_eq!(entry.kind(), EntryKind::File);
        assert_eq!(entry.size(), 5);
        assert!(!entry.is_hidden());
        assert!(entry.modified() > SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn entry_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entry = read_single(tmp.path());
        assert_eq!(entry.kind(), EntryKind::Directory);
        assert!(entry.link_target().is_none());
    }

    #[test]
    fn hidden_detection() {
        let entry = DirectoryEntry::new(PathBuf::from("/x/.hidden"), EntryKind::File);
        assert!(entry.is_hidden());
    }

    #[test]
    fn extension_uses_last_dot() {
        let ext = |name: &str| {
            DirectoryEntry::new(PathBuf::from(name), EntryKind::File)
                .extension()
                .map(str::to_string)
        };
        assert_eq!(ext("a.txt").as_deref(), Some(".txt"));
        assert_eq!(ext("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(ext(".bashrc").as_deref(), Some(".bashrc"));
        assert_eq!(ext("Makefile"), None);
    }

    #[test]
    fn vanished_entry_has_no_metadata() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.txt");
        fs::write(&path, "abc").unwrap();
        let entry = DirectoryEntry::new(path.clone(), EntryKind::File);
        fs::remove_file(&path).unwrap();

        assert!(entry.metadata().is_none());
        assert_eq!(entry.size(), 0);
        assert_eq!(entry.modified(), SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn metadata_is_read_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "abc").unwrap();
        let entry = DirectoryEntry::new(path.clone(), EntryKind::File);
        assert_eq!(entry.size(), 3);

        fs::write(&path, "abcdef").unwrap();
        assert_eq!(entry.size(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_entry_reports_target() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("target.txt"), "x").unwrap();
        std::os::unix::fs::symlink("target.txt", tmp.path().join("link")).unwrap();

        let entry = DirectoryEntry::new(tmp.path().join("link"), EntryKind::Symlink);
        assert_eq!(entry.link_target(), Some(PathBuf::from("target.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_detected() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("run.sh");
        fs::write(&path, "#!/bin/sh").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let entry = DirectoryEntry::new(path, EntryKind::File);
        let metadata = entry.metadata().unwrap();
        assert!(metadata.executable);
        assert_eq!(metadata.mode & 0o777, 0o755);
    }
}
