//! Unified application error type.
//! All modules (db, cache, calendar, core, cli, export) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Year {0} is not available (allowed: {1})")]
    InvalidYear(i32, String),

    #[error("Invalid role filter: {0} (expected All, Newcomer or Visitor)")]
    InvalidRole(String),

    #[error("Day {0} is not part of the displayed months")]
    InvalidDay(String),

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    // ---------------------------
    // Registration
    // ---------------------------
    #[error("{0}")]
    Registration(String),

    #[error("You are already registered as a newcomer ({0}). Logout to register a new user.")]
    AlreadyRegistered(String),

    // ---------------------------
    // Report preconditions
    // ---------------------------
    #[error("Please select a day first to download the daily report.")]
    NoDaySelected,

    #[error("No entries available for the selected day.")]
    NoEntriesForDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
