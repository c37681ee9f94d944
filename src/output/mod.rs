//! Output formatting for CLI display
//!
//! Color control for listings and the formatting of tag command messages.

use crate::config::ColorMode;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;

/// Configure `colored` for `mode` and report whether listings should be
/// colorized.
///
/// `Auto` colors only when stdout is a terminal and the environment
/// (`NO_COLOR`, `CLICOLOR`) does not say otherwise.
pub fn apply_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => {
            colored::control::set_override(true);
            true
        }
        ColorMode::Never => {
            colored::control::set_override(false);
            false
        }
        ColorMode::Auto => {
            std::io::stdout().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
        }
    }
}

/// Confirmation after tagging
#[must_use]
pub fn tagged(path: &Path, tags: &[String]) -> String {
    format!("Tagged {} with: {}", path.display(), tags.join(", "))
}

/// Confirmation after untagging
#[must_use]
pub fn untagged(path: &Path, removed: &[String], missing: &[String]) -> String {
    let mut message = if removed.is_empty() {
        format!("No tags removed from {}", path.display())
    } else {
        format!("Removed tags {} from {}", removed.join(", "), path.display())
    };
    if !missing.is_empty() {
        message.push_str(&format!(" (not tagged: {})", missing.join(", ")));
    }
    message
}

/// Tags of one file, one per line; a note when there are none
#[must_use]
pub fn file_tags(path: &Path, tags: &[String], quiet: bool) -> Vec<String> {
    if quiet {
        return tags.to_vec();
    }
    if tags.is_empty() {
        return vec![format!("{} (no tags)", path.display())];
    }
    let mut lines = Vec::with_capacity(tags.len() + 1);
    lines.push(format!("{}:", path.display().to_string().bold()));
    lines.extend(tags.iter().map(|t| format!("  {t}")));
    lines
}
