//! Config command - read and change settings

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::{BoltConfig, KEYS},
    BoltError, Result,
};

/// Execute the config command against the config file at `path`
///
/// `get` reads the effective `config`, environment overrides included.
/// `set` edits only what the file itself holds.
///
/// # Errors
/// Returns an error if the key is unknown, the value is invalid, or the
/// configuration cannot be saved
pub fn execute(
    config: &BoltConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                BoltError::InvalidInput("Invalid format. Use: bolt config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            let mut stored = BoltConfig::load_file(path)?;
            stored.set(key, value).map_err(|e| unknown_key_hint(key, e))?;
            stored.save_to(path)?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).map_err(|e| unknown_key_hint(key, e))?;
            println!("{value}");
        }
    }
    Ok(())
}

fn unknown_key_hint(key: &str, err: ::config::ConfigError) -> BoltError {
    match err {
        ::config::ConfigError::NotFound(_) => BoltError::InvalidInput(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            KEYS.join(", ")
        )),
        other => other.into(),
    }
}
