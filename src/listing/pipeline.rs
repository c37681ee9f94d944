//! The listing pipeline: resolve, read, filter, sort, render, write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::columns::{default_columns, DEFAULT_TIME_FORMAT};
use super::entry::DirectoryEntry;
use super::error::ListingError;
use super::filter::filter_entries;
use super::options::ListingOptions;
use super::render::{render_long, render_short};
use super::sort::sort_entries;
use crate::tags::TagSource;

/// Presentation settings that do not change what is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub color: bool,
    /// chrono format string of the modified column
    pub time_format: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            color: false,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Outcome of a successful listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    /// Canonical path of the listed directory
    pub directory: PathBuf,
    /// Number of entries written, not counting the header
    pub listed: usize,
}

/// Read every entry of `dir` in `read_dir` order.
///
/// # Errors
///
/// Returns `ListingError::DirectoryRead` if the directory or any of its
/// entries cannot be read.
pub fn read_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, ListingError> {
    let read_err = |source| ListingError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    fs::read_dir(dir)
        .map_err(read_err)?
        .map(|item| {
            let item = item.map_err(read_err)?;
            DirectoryEntry::from_dir_entry(&item).map_err(read_err)
        })
        .collect()
}

/// List `path` according to `options` and write the result to `out`.
///
/// Everything is rendered before the first byte is written, so a failed
/// listing never produces partial output.
///
/// # Errors
///
/// Returns `ListingError::DirectoryRead` if `path` cannot be resolved or
/// read, `ListingError::Filter` if a tag lookup fails, and
/// `ListingError::Output` if writing to `out` fails.
pub fn list_directory<W: Write>(
    path: &Path,
    options: &ListingOptions,
    tags: &dyn TagSource,
    settings: &RenderSettings,
    out: &mut W,
) -> Result<ListingSummary, ListingError> {
    debug!(?options, dir = %path.display(), "listing directory");

    let directory = path.canonicalize().map_err(|source| ListingError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = read_entries(&directory).map_err(|e| match e {
        ListingError::DirectoryRead { source, .. } => ListingError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    let read = entries.len();

    let mut entries = filter_entries(entries, options, tags)?;
    sort_entries(&mut entries, options.sort_key, options.reverse);

    let lines = if options.long_format {
        let columns = default_columns(&settings.time_format);
        render_long(&entries, &columns, settings.color)
    } else {
        render_short(&entries, settings.color)
    };
    let listed = if options.long_format {
        lines.len().saturating_sub(1)
    } else {
        lines.len()
    };

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(dir = %directory.display(), read, listed, "listed directory contents");
    Ok(ListingSummary { directory, listed })
}
