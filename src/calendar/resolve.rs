//! Day resolution: map a heterogeneous visit record to one calendar day.
//!
//! Lookup order:
//! 1. `date` string: first `YYYY-MM-DD` substring, else a locale-formatted date;
//! 2. `createdAt` string containing `YYYY-MM-DD`;
//! 3. every field in document order: a string containing `YYYY-MM-DD`, or a
//!    document-store timestamp (`{"seconds", "nanoseconds"}`) taken in UTC;
//! 4. nothing: the record has no day and is left out of every bucket.
//!
//! Step 3 also matches coincidental dates in unrelated fields (a purpose
//! like "follow-up of 2025-01-02" dates the record). That is kept as is.

use crate::models::VisitRecord;
use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("valid ISO date regex")
});

/// Formats accepted for locale-style `date` fields.
///
/// `%y` variants come first: `%Y` also accepts two digits and would read
/// `25` as year 25.
const LOCALE_FORMATS: [&str; 15] = [
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A %B %d %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
];

/// A resolved calendar day, kept as the digits found in the record.
///
/// The components are not validated against the calendar: a day that does
/// not exist (e.g. `2025-02-30`) simply never matches a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl IsoDay {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

impl From<NaiveDate> for IsoDay {
    fn from(d: NaiveDate) -> Self {
        Self::new(d.year(), d.month(), d.day())
    }
}

impl fmt::Display for IsoDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// First `YYYY-MM-DD` substring of `s`.
pub fn find_iso_day(s: &str) -> Option<IsoDay> {
    let caps = ISO_DATE.captures(s)?;
    Some(IsoDay::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Parse a locale-formatted date such as `12/12/2025`, `June 15, 2025`,
/// `12/12/2025, 10:30:00 AM` or `Sun Jun 15 2025 10:00:00 GMT+0800`.
pub fn parse_locale_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    let tokens: Vec<&str> = s.split_whitespace().collect();
    let mut candidates = vec![s.to_string()];
    if let Some((head, _)) = s.split_once(',') {
        candidates.push(head.trim().to_string());
    }
    for n in [3, 4] {
        if tokens.len() > n {
            candidates.push(tokens[..n].join(" "));
        }
    }

    candidates.iter().find_map(|c| {
        LOCALE_FORMATS
            .iter()
            .filter_map(|fmt| NaiveDate::parse_from_str(c, fmt).ok())
            .find(|d| d.year() >= 100)
    })
}

/// Calendar day (UTC) of a document-store timestamp object.
fn timestamp_day(value: &Value) -> Option<IsoDay> {
    let obj = value.as_object()?;
    let (secs, nanos) = match (obj.get("seconds"), obj.get("nanoseconds")) {
        (Some(s), Some(n)) => (s, n),
        _ => (obj.get("_seconds")?, obj.get("_nanoseconds")?),
    };
    let dt = DateTime::from_timestamp(secs.as_i64()?, u32::try_from(nanos.as_u64()?).ok()?)?;
    Some(dt.date_naive().into())
}

/// Resolve the day a record belongs to, or `None` when nothing date-like is found.
pub fn resolve_day(record: &VisitRecord) -> Option<IsoDay> {
    if let Some(date) = record.str_field("date").filter(|s| !s.is_empty()) {
        if let Some(day) = find_iso_day(date) {
            return Some(day);
        }
        if let Some(d) = parse_locale_date(date) {
            return Some(d.into());
        }
    }

    if let Some(day) = record.str_field("createdAt").and_then(find_iso_day) {
        return Some(day);
    }

    record.values().find_map(|value| match value {
        Value::String(s) => find_iso_day(s),
        Value::Object(_) => timestamp_day(value),
        _ => None,
    })
}
