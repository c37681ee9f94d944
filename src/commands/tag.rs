//! Tag, untag and tags commands

use std::path::Path;

use crate::{
    output,
    tags::{identifier_for, TagStore},
    BoltError, Result,
};

/// Execute the tag command - append tags to a file
///
/// Each tag is appended even if the file already carries it.
///
/// # Errors
/// Returns an error if no tags are given, the file cannot be accessed, or
/// the tag store cannot be loaded or saved
pub fn execute(store: &TagStore, file: &Path, tags: &[String], quiet: bool) -> Result<()> {
    if tags.is_empty() {
        return Err(BoltError::InvalidInput("No tags provided".into()));
    }
    if tags.iter().any(String::is_empty) {
        return Err(BoltError::InvalidInput("Tags cannot be empty".into()));
    }
    if let Err(e) = file.symlink_metadata() {
        return Err(BoltError::InvalidInput(format!(
            "Cannot access path '{}': {e}",
            file.display()
        )));
    }

    let identifier = identifier_for(file)?;
    for tag in tags {
        store.add_tag(&identifier, tag)?;
    }

    if !quiet {
        println!("{}", output::tagged(file, tags));
    }
    Ok(())
}

/// Execute the untag command - remove the first occurrence of each tag
///
/// The file does not need to exist, so tags of deleted files can be
/// cleaned up.
///
/// # Errors
/// Returns an error if the path cannot be resolved or the tag store cannot
/// be saved (or loaded, with strict removal)
pub fn untag(store: &TagStore, file: &Path, tags: &[String], quiet: bool) -> Result<()> {
    if tags.is_empty() {
        return Err(BoltError::InvalidInput("No tags provided".into()));
    }

    let identifier = identifier_for(file)?;
    let mut removed = Vec::new();
    let mut missing = Vec::new();
    for tag in tags {
        if store.remove_tag(&identifier, tag)? {
            removed.push(tag.clone());
        } else {
            missing.push(tag.clone());
        }
    }

    if !quiet {
        println!("{}", output::untagged(file, &removed, &missing));
    }
    Ok(())
}

/// Execute the tags command - print the tags of a file
///
/// # Errors
/// Returns an error if the path cannot be resolved or the tag store cannot
/// be loaded
pub fn show(store: &TagStore, file: &Path, quiet: bool) -> Result<()> {
    let identifier = identifier_for(file)?;
    let tags = store.tags_for(&identifier)?;
    for line in output::file_tags(file, &tags, quiet) {
        println!("{line}");
    }
    Ok(())
}
