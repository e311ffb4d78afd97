//! Path helpers for user-supplied locations (export directory, preferences).

use std::env;
use std::path::{Path, PathBuf};

use dirs_next::home_dir;

/// Environment variable overriding where CSV exports are written.
pub const EXPORT_DIR_ENV: &str = "ROSTER_EXPORT_DIR";

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Picks the export directory: explicit value first, then
/// [`EXPORT_DIR_ENV`], then the saved preference, then the working directory.
pub fn resolve_export_dir(explicit: Option<&str>, preferred: Option<&str>) -> PathBuf {
    let from_env = env::var(EXPORT_DIR_ENV).ok();
    [explicit, from_env.as_deref(), preferred]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(expand_tilde)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Joins `file_name` onto `dir`, refusing names that would escape it.
pub fn export_file_path(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let candidate = Path::new(file_name);
    let is_plain = candidate.components().count() == 1 && candidate.file_name().is_some();
    is_plain.then(|| dir.join(candidate))
}
