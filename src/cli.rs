//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for bolt using the `clap` crate.
//!
//! # Commands
//!
//! - **ls**: List a directory (short or long format, sorted, filtered)
//! - **tag**: Attach tags to a file
//! - **untag**: Remove tags from a file
//! - **tags**: Show the tags of a file
//! - **config**: Read or change settings
//!
//! # Examples
//!
//! ```
//! use bolt::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["bolt", "ls", "-l", "--sort", "size", "src"]);
//! assert!(matches!(cli.command, Commands::Ls { .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ColorMode;
use crate::listing::{ListingOptions, SortKey};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., color=never)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., color)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bolt")]
#[command(about = "List directories and filter them by extension or tag", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to colorize output (overrides config)
    #[arg(long = "color", value_enum, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Tag file to use (overrides config)
    #[arg(long = "tag-file", global = true, value_name = "PATH")]
    pub tag_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List directory contents
    #[command(visible_alias = "list")]
    Ls {
        /// Directory to list
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Use the long listing format
        #[arg(short = 'l', long = "long")]
        long: bool,

        /// Show hidden files
        #[arg(short = 'a', long = "all")]
        all: bool,

        /// Reverse the sort order
        #[arg(short = 'r', long = "reverse")]
        reverse: bool,

        /// Sort by: name, size, modified-time (alias createdDate)
        #[arg(short = 's', long = "sort", value_name = "KEY", default_value = "name")]
        sort: String,

        /// Only list files with this extension (leading '.') or tag
        #[arg(short = 't', long = "tag", value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Tag a file with one or more tags
    #[command(visible_alias = "t")]
    Tag {
        /// File to tag
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tags to apply
        #[arg(value_name = "TAGS", required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from a file (first occurrence of each)
    Untag {
        /// File to untag
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tags to remove
        #[arg(value_name = "TAGS", required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Show the tags of a file
    Tags {
        /// File to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Build listing options from the `ls` flags
    ///
    /// Returns `None` for other commands.
    #[must_use]
    pub fn listing_options(&self) -> Option<ListingOptions> {
        match self {
            Self::Ls {
                long,
                all,
                reverse,
                sort,
                filter,
                ..
            } => Some(
                ListingOptions::new()
                    .long(*long)
                    .all(*all)
                    .reversed(*reverse)
                    .sorted_by(SortKey::parse_or_default(sort))
                    .filtered(filter.as_deref().unwrap_or_default()),
            ),
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
