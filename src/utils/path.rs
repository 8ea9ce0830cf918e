//! Path utilities: expand ~ in configured paths and build report file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/daily-report-<iso>.<ext>`
pub fn daily_report_path(dir: &Path, iso_day: &str, ext: &str) -> PathBuf {
    dir.join(format!("daily-report-{iso_day}.{ext}"))
}
