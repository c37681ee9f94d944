//! Listing error types
//!
//! Any of these aborts the whole listing before output is written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::tags::TagStoreError;

/// Errors from the entry filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Tags of an entry could not be looked up
    #[error("Failed to look up tags for {identifier}: {source}")]
    TagLookup {
        identifier: String,
        #[source]
        source: TagStoreError,
    },

    /// Tag file could not be loaded for a tag filter
    #[error("Failed to load tags: {0}")]
    TagLoad(#[source] TagStoreError),
}

/// Errors from the listing pipeline
#[derive(Debug, Error)]
pub enum ListingError {
    /// Directory is missing, not a directory, or unreadable
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Filtering failed
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Writing the rendered listing failed
    #[error("Failed to write listing: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
