//! ANSI color helper utilities for terminal output.

use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for the "—" placeholder, unchanged text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "—" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Strip ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    ANSI.replace_all(s, "").into_owned()
}
