//! Tag store
//!
//! Tags are freeform strings attached to file identifiers and kept outside
//! the filesystem, in a single JSON file (`~/.bolt_tags.json` by default).
//!
//! # Identifiers
//!
//! A file is identified by its absolute path: the canonicalized parent
//! directory joined with the file name. The file itself does not need to
//! exist and a symlink is identified by its own path, not its target.
//! Listing and tagging both go through this, so a tag added from one working
//! directory is found when listing from any other.
//!
//! # Examples
//!
//! ```no_run
//! use bolt::tags::{identifier_for, TagStore};
//! use std::path::Path;
//!
//! let store = TagStore::at_default_location().unwrap();
//! let id = identifier_for(Path::new("notes.txt")).unwrap();
//! store.add_tag(&id, "work").unwrap();
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::TagStoreError;
pub use store::TagStore;
pub use types::TagMap;

use std::path::Path;

/// Read access to tags, injected into the listing filter
pub trait TagSource {
    /// Tags attached to `identifier`; an unknown identifier has no tags
    ///
    /// # Errors
    ///
    /// Returns `TagStoreError` if the backing storage cannot be read.
    fn lookup(&self, identifier: &str) -> Result<Vec<String>, TagStoreError>;
}

impl TagSource for TagMap {
    fn lookup(&self, identifier: &str) -> Result<Vec<String>, TagStoreError> {
        Ok(self.tags_for(identifier).to_vec())
    }
}

/// Resolve `path` to its tag identifier
///
/// # Errors
///
/// Returns `TagStoreError::Identifier` if the working directory or the
/// parent directory cannot be resolved.
pub fn identifier_for(path: &Path) -> Result<String, TagStoreError> {
    let resolve_err = |source| TagStoreError::Identifier {
        path: path.to_path_buf(),
        source,
    };

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_err(resolve_err)?.join(path)
    };

    let resolved = match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => parent.canonicalize().map_err(resolve_err)?.join(name),
        _ => absolute.canonicalize().map_err(resolve_err)?,
    };
    Ok(resolved.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_identifier_is_absolute() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let id = identifier_for(&file).unwrap();
        let expected = dir.path().canonicalize().unwrap().join("a.txt");
        assert_eq!(id, expected.to_string_lossy());
    }

    #[test]
    fn test_identifier_normalizes_parent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let direct = identifier_for(&dir.path().join("a.txt")).unwrap();
        let detour = identifier_for(&dir.path().join("sub").join("..").join("a.txt")).unwrap();
        assert_eq!(direct, detour);
    }

    #[test]
    fn test_identifier_for_missing_file_in_existing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(identifier_for(&dir.path().join("gone.txt")).is_ok());
    }

    #[test]
    fn test_identifier_for_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let result = identifier_for(&dir.path().join("nope").join("a.txt"));
        assert!(matches!(result, Err(TagStoreError::Identifier { .. })));
    }

    #[test]
    fn test_tag_map_as_source() {
        let mut map = TagMap::new();
        map.add("a", "work");
        let source: &dyn TagSource = &map;
        assert_eq!(source.lookup("a").unwrap(), vec!["work"]);
        assert!(source.lookup("b").unwrap().is_empty());
    }
}
