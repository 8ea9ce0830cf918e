use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role filter applied to the calendar: `All` keeps every record, the other
/// variants keep records whose `type` matches case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RoleFilter {
    #[default]
    All,
    Newcomer,
    Visitor,
}

impl RoleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFilter::All => "All",
            RoleFilter::Newcomer => "Newcomer",
            RoleFilter::Visitor => "Visitor",
        }
    }

    /// Parse a role name, case-insensitively.
    pub fn from_name(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RoleFilter::All),
            "newcomer" | "newcomers" => Ok(RoleFilter::Newcomer),
            "visitor" | "visitors" => Ok(RoleFilter::Visitor),
            _ => Err(AppError::InvalidRole(s.to_string())),
        }
    }

    /// Whether a record tagged with `record_type` passes this filter.
    pub fn matches(&self, record_type: &str) -> bool {
        match self {
            RoleFilter::All => true,
            other => record_type.to_lowercase() == other.as_str().to_lowercase(),
        }
    }

    /// The Purpose column is shown only when filtering on visitors.
    pub fn shows_purpose(&self) -> bool {
        matches!(self, RoleFilter::Visitor)
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
