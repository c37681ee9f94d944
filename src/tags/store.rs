//! File-backed tag store
//!
//! Every operation re-reads the tag file; nothing is cached between calls.
//! Mutations are load-modify-save of the whole map. There is no locking, so
//! two processes mutating tags at the same time race and the last writer wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::TagStoreError;
use super::types::TagMap;
use super::TagSource;

/// File name of the tag store inside the home directory
pub const TAG_FILE_NAME: &str = ".bolt_tags.json";

/// Persisted tag store
///
/// # Examples
///
/// ```no_run
/// use bolt::tags::TagStore;
///
/// let store = TagStore::at_default_location().unwrap();
/// store.add_tag("/home/me/notes.txt", "work").unwrap();
/// assert!(store.tags_for("/home/me/notes.txt").unwrap().contains(&"work".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct TagStore {
    path: PathBuf,
    strict_remove: bool,
}

impl TagStore {
    /// Create a store backed by the file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            strict_remove: false,
        }
    }

    /// Store at `~/.bolt_tags.json`, `None` if the home directory is unknown
    #[must_use]
    pub fn at_default_location() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    /// Default tag file path
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(TAG_FILE_NAME))
    }

    /// Propagate load failures from [`TagStore::remove_tag`] instead of
    /// treating them as "nothing to remove"
    #[must_use]
    pub const fn with_strict_remove(mut self, strict: bool) -> Self {
        self.strict_remove = strict;
        self
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole tag map
    ///
    /// A missing file yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns `TagStoreError` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<TagMap, TagStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "tag file does not exist, using empty map");
                return Ok(TagMap::new());
            }
            Err(source) => {
                return Err(TagStoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| TagStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Tags for `identifier`, empty if it has none
    ///
    /// # Errors
    ///
    /// Returns `TagStoreError` if the tag file cannot be loaded.
    pub fn tags_for(&self, identifier: &str) -> Result<Vec<String>, TagStoreError> {
        Ok(self.load()?.tags_for(identifier).to_vec())
    }

    /// Append `tag` to `identifier`, even if it is already present
    ///
    /// # Errors
    ///
    /// Returns `TagStoreError` if the tag file cannot be loaded or saved.
    pub fn add_tag(&self, identifier: &str, tag: &str) -> Result<(), TagStoreError> {
        let mut map = self.load()?;
        map.add(identifier, tag);
        self.save(&map)
    }

    /// Remove the first occurrence of `tag` from `identifier`
    ///
    /// Returns `true` if a tag was removed. Unless strict removal is enabled,
    /// a tag file that cannot be loaded is logged and treated as having
    /// nothing to remove; the file is then left untouched.
    ///
    /// # Errors
    ///
    /// Returns `TagStoreError` if saving fails, or if loading fails with
    /// strict removal enabled.
    pub fn remove_tag(&self, identifier: &str, tag: &str) -> Result<bool, TagStoreError> {
        let mut map = match self.load() {
            Ok(map) => map,
            Err(e) if !self.strict_remove => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load tag file, nothing removed"
                );
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if !map.remove(identifier, tag) {
            return Ok(false);
        }
        self.save(&map)?;
        Ok(true)
    }

    /// Write the map to a temporary file next to the target, then move it
    /// over the target so a failed write never leaves a truncated tag file.
    fn save(&self, map: &TagMap) -> Result<(), TagStoreError> {
        let write_err = |source| TagStoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_err)?;

        let data = serde_json::to_vec_pretty(map)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&data).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!(path = %self.path.display(), files = map.len(), "saved tag file");
        Ok(())
    }
}

impl TagSource for TagStore {
    fn lookup(&self, identifier: &str) -> Result<Vec<String>, TagStoreError> {
        self.tags_for(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TagStore {
        TagStore::new(dir.path().join("tags.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(store.tags_for("a.txt").unwrap().is_empty());
    }

    #[test]
    fn test_add_then_lookup() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_tag("a.txt", "work").unwrap();
        assert_eq!(store.tags_for("a.txt").unwrap(), vec!["work".to_string()]);
        assert!(store.path().exists());
    }

    #[test]
    fn test_add_twice_keeps_duplicate() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_tag("a.txt", "work").unwrap();
        store.add_tag("a.txt", "work").unwrap();
        assert_eq!(store.tags_for("a.txt").unwrap(), vec!["work", "work"]);
    }

    #[test]
    fn test_remove_first_occurrence() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_tag("a.txt", "work").unwrap();
        store.add_tag("a.txt", "work").unwrap();
        assert!(store.remove_tag("a.txt", "work").unwrap());
        assert_eq!(store.tags_for("a.txt").unwrap(), vec!["work"]);

        assert!(store.remove_tag("a.txt", "work").unwrap());
        assert!(store.tags_for("a.txt").unwrap().is_empty());
    }

    #[test]
    fn test_remove_absent_tag_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_tag("a.txt", "work").unwrap();
        assert!(!store.remove_tag("a.txt", "home").unwrap());
        assert_eq!(store.tags_for("a.txt").unwrap(), vec!["work"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(TagStoreError::Parse { .. })));
        assert!(store.add_tag("a.txt", "work").is_err());
        // the unreadable file must survive the failed mutation
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn test_remove_with_unloadable_file_is_lenient_by_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(!store.remove_tag("a.txt", "work").unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn test_remove_with_unloadable_file_strict() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).with_strict_remove(true);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.remove_tag("a.txt", "work"),
            Err(TagStoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_file_round_trips_other_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"b.txt": ["home"]}"#).unwrap();

        store.add_tag("a.txt", "work").unwrap();

        let map = store.load().unwrap();
        assert_eq!(map.tags_for("a.txt"), ["work"]);
        assert_eq!(map.tags_for("b.txt"), ["home"]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = TagStore::new(dir.path().join("nested").join("tags.json"));
        store.add_tag("a.txt", "work").unwrap();
        assert!(store.path().exists());
    }
}
