//! Tag store error types
//!
//! All failures of the tag file are reported through [`TagStoreError`].
//! A missing tag file is never an error: it reads as an empty map.
//!
//! # Error Types
//!
//! - **`Read`**: the tag file exists but could not be read
//! - **`Parse`**: the tag file is not a JSON object of string arrays
//! - **`Serialize`**: the in-memory map could not be encoded
//! - **`Write`**: the new tag file could not be written or moved into place
//! - **`Identifier`**: a file path could not be resolved to a tag identifier

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tag store errors
#[derive(Debug, Error)]
pub enum TagStoreError {
    /// Tag file exists but is unreadable
    #[error("Failed to read tag file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tag file content is not valid
    #[error("Failed to parse tag file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Tag map could not be encoded as JSON
    #[error("Failed to encode tags: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Tag file could not be written
    #[error("Failed to write tag file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path could not be turned into a tag identifier
    #[error("Cannot resolve path '{}': {source}", path.display())]
    Identifier {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
