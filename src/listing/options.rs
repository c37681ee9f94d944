//! Listing options

use std::fmt;

use tracing::warn;

/// The field by which entries are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Byte-wise comparison of names
    #[default]
    Name,
    /// Size in bytes
    Size,
    /// Last-modified time
    ModifiedTime,
}

impl SortKey {
    /// Parse a sort key name, `None` if it is not recognized.
    ///
    /// Accepts `name`, `size` and `modified-time`, plus the aliases
    /// `createdDate`, `mtime` and `time` for the modification time.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "modified-time" | "createdDate" | "mtime" | "time" => Some(Self::ModifiedTime),
            _ => None,
        }
    }

    /// Parse a sort key, falling back to [`SortKey::Name`] with a warning.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(key = name, "unknown sort key, sorting by name");
            Self::Name
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::ModifiedTime => "modified-time",
        })
    }
}

/// How the `--tag` value narrows a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryFilter {
    /// No extension or tag filtering
    #[default]
    None,
    /// Keep entries whose last extension equals this literal (with its dot)
    Extension(String),
    /// Keep entries carrying this tag
    Tag(String),
}

impl EntryFilter {
    /// Interpret a filter literal: a leading `.` means extension, anything
    /// else is a tag, and an empty string means no filter.
    #[must_use]
    pub fn parse(literal: &str) -> Self {
        if literal.is_empty() {
            Self::None
        } else if literal.starts_with('.') {
            Self::Extension(literal.to_string())
        } else {
            Self::Tag(literal.to_string())
        }
    }

    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

/// Immutable configuration of one listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingOptions {
    pub long_format: bool,
    pub show_hidden: bool,
    pub reverse: bool,
    pub sort_key: SortKey,
    pub filter: EntryFilter,
}

impl ListingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn long(mut self, long_format: bool) -> Self {
        self.long_format = long_format;
        self
    }

    #[must_use]
    pub const fn all(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    #[must_use]
    pub const fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    #[must_use]
    pub fn filtered(mut self, literal: &str) -> Self {
        self.filter = EntryFilter::parse(literal);
        self
    }
}
