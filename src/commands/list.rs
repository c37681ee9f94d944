//! List command - list a directory

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, error};

use crate::{
    listing::{self, FilterError, ListingError, ListingOptions, RenderSettings},
    tags::{TagMap, TagStore},
    Result,
};

/// Execute the list command, writing the listing to stdout
///
/// # Errors
/// Returns an error if the directory cannot be read, the tag file cannot be
/// loaded for a tag filter, or stdout cannot be written
pub fn execute(
    path: &Path,
    options: &ListingOptions,
    store: &TagStore,
    settings: &RenderSettings,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    list_to(path, options, store, settings, &mut stdout).map_err(|e| {
        error!(dir = %path.display(), error = %e, "listing failed");
        e
    })?;
    Ok(())
}

/// Tag snapshot for one listing: the whole tag file when filtering by tag,
/// otherwise an empty map and no file access
fn load_tags(options: &ListingOptions, store: &TagStore) -> std::result::Result<TagMap, ListingError> {
    if !options.filter.is_tag() {
        return Ok(TagMap::new());
    }

    let tags = store.load().map_err(FilterError::TagLoad)?;
    debug!(path = %store.path().display(), files = tags.len(), "loaded tags for filter");
    Ok(tags)
}

fn list_to<W: Write>(
    path: &Path,
    options: &ListingOptions,
    store: &TagStore,
    settings: &RenderSettings,
    out: &mut W,
) -> std::result::Result<(), ListingError> {
    let tags = load_tags(options, store)?;
    listing::list_directory(path, options, &tags, settings, out)?;
    Ok(())
}
