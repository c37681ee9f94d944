//! Bolt - directory listings with sorting, colors and file tags
//!
//! This library lists directories (short or long format, sorted by name,
//! size or modification time, colorized by file kind) and keeps freeform
//! tags for files in a JSON file, so listings can be filtered by tag as
//! well as by extension.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod listing;
pub mod logging;
pub mod output;
pub mod tags;

#[cfg(test)]
pub(crate) mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BoltError {
    /// Listing error
    #[error(transparent)]
    Listing(#[from] listing::ListingError),
    /// Tag store error
    #[error("Tag store error: {0}")]
    Tags(#[from] tags::TagStoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used by the command layer
pub type Result<T> = std::result::Result<T, BoltError>;
