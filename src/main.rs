//! Bolt CLI application entry point
//!
//! Lists directories with sorting, colors and long-format columns, and keeps
//! freeform file tags that listings can be filtered by.
//!
//! # Usage
//!
//! ```bash
//! # List the current directory
//! bolt ls
//!
//! # Long format, hidden files, largest first
//! bolt ls -l -a -s size -r
//!
//! # Only .rs files, or only files tagged "work"
//! bolt ls -t .rs src
//! bolt ls -t work
//!
//! # Manage tags
//! bolt tag notes.txt work draft
//! bolt untag notes.txt draft
//! bolt tags notes.txt
//!
//! # Settings
//! bolt config set color=never
//! bolt config get time_format
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory (`~/.config/bolt/config.toml`
//! on Linux); tags live in `~/.bolt_tags.json` unless `tag_file` is set.

use std::process;

use bolt::{
    cli::{Cli, Commands},
    commands,
    config::BoltConfig,
    listing::RenderSettings,
    logging, output,
    tags::TagStore,
    BoltError, Result,
};

fn run(cli: Cli) -> Result<()> {
    let config = BoltConfig::load()?;
    let quiet = cli.quiet;

    let open_store = || -> Result<TagStore> {
        let tag_file = cli
            .tag_file
            .clone()
            .or_else(|| config.tag_file_path())
            .ok_or_else(|| {
                BoltError::InvalidInput(
                    "Could not determine the tag file location. Set one with --tag-file or 'bolt config set tag_file=<path>'".into(),
                )
            })?;
        Ok(TagStore::new(tag_file).with_strict_remove(config.strict_untag))
    };

    match &cli.command {
        Commands::Ls { path, .. } => {
            let options = cli.command.listing_options().ok_or_else(|| {
                BoltError::InvalidInput("Failed to parse listing options".into())
            })?;
            let settings = RenderSettings {
                color: output::apply_color_mode(cli.color.unwrap_or(config.color)),
                time_format: config.time_format.clone(),
            };
            commands::list(path, &options, &open_store()?, &settings)
        }
        Commands::Tag { file, tags } => commands::tag(&open_store()?, file, tags, quiet),
        Commands::Untag { file, tags } => commands::untag(&open_store()?, file, tags, quiet),
        Commands::Tags { file } => {
            output::apply_color_mode(cli.color.unwrap_or(config.color));
            commands::tags(&open_store()?, file, quiet)
        }
        Commands::Config { command } => {
            let path = BoltConfig::config_path()?;
            commands::config(&config, &path, command, quiet)
        }
    }
}

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
