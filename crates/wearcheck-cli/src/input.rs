//! Input loading for CLI commands.

use anyhow::{Context, Result};
use std::path::Path;
use wearcheck_spec::{ModelStats, Slot, UserSelection};

/// Loads model statistics from a JSON file.
pub fn load_stats(path: &Path) -> Result<ModelStats> {
    ModelStats::from_file(path)
        .with_context(|| format!("Failed to load model statistics: {}", path.display()))
}

/// Builds a selection from command-line slot names.
///
/// The target must be a wearable slot. Unknown hidden slot names are
/// dropped with a warning.
pub fn build_selection(
    target: &str,
    hide: &[String],
    hand_hides_base: bool,
) -> Result<UserSelection> {
    let target =
        Slot::parse_target(target).with_context(|| format!("Invalid target slot: {}", target))?;
    Ok(UserSelection::from_names(target, hide, hand_hides_base))
}

/// Default file name to echo in the report: the stats file's name.
pub fn default_file_name(stats_path: &Path) -> String {
    stats_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| stats_path.display().to_string())
}
