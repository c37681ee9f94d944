//! Directory listing
//!
//! A listing runs as one linear pass:
//!
//! 1. resolve the target path
//! 2. read the directory entries
//! 3. filter them (hidden files, extension literal or tag)
//! 4. sort them by name, size or modification time
//! 5. render a short (name per line) or long (columns) listing
//! 6. write the rendered lines to the output stream
//!
//! Entry metadata is read at most once per entry, so all stages see the
//! same snapshot even if the directory changes mid-run.
//!
//! # Examples
//!
//! ```no_run
//! use bolt::listing::{list_directory, ListingOptions, RenderSettings, SortKey};
//! use bolt::tags::TagMap;
//! use std::path::Path;
//!
//! let options = ListingOptions::new().long(true).sorted_by(SortKey::Size);
//! let mut out = std::io::stdout();
//! list_directory(Path::new("."), &options, &TagMap::new(), &RenderSettings::default(), &mut out)
//!     .unwrap();
//! ```

pub mod columns;
pub mod entry;
pub mod error;
pub mod filter;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod sort;

pub use columns::{default_columns, humanize_size, Column};
pub use entry::{DirectoryEntry, EntryKind, EntryMetadata};
pub use error::{FilterError, ListingError};
pub use filter::filter_entries;
pub use options::{EntryFilter, ListingOptions, SortKey};
pub use pipeline::{list_directory, read_entries, ListingSummary, RenderSettings};
pub use render::{render_long, render_short};
pub use sort::sort_entries;
