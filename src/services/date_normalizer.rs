//! Upstream date normalization
//!
//! Each vertical sends dates in one fixed format. Parsing never fails the
//! pipeline: a bad string becomes a [`DateParseWarning`], and the sort-key
//! boundary collapses it to [`NormalizedTimestamp::EARLIEST`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use thiserror::Error as ThisError;
use tracing::warn;

/// Date formats used by the upstream export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// YYYY-MM-DD
    IsoDate,
    /// YYYY-MM-DD HH:MM:SS (news)
    IsoDateTime,
    /// MM/DD/YYYY (filings)
    UsSlashDate,
}

impl DateFormat {
    /// chrono format string
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "%Y-%m-%d",
            DateFormat::IsoDateTime => "%Y-%m-%d %H:%M:%S",
            DateFormat::UsSlashDate => "%m/%d/%Y",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "iso-date",
            DateFormat::IsoDateTime => "iso-datetime",
            DateFormat::UsSlashDate => "us-slash-date",
        }
    }

    fn has_time(&self) -> bool {
        matches!(self, DateFormat::IsoDateTime)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparable point in time used only for ordering and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedTimestamp(NaiveDateTime);

impl NormalizedTimestamp {
    /// Sentinel for unparsable dates; sorts before every real date
    pub const EARLIEST: NormalizedTimestamp = NormalizedTimestamp(NaiveDateTime::MIN);

    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::EARLIEST
    }
}

/// Non-fatal diagnostic for a date that does not match its vertical's format
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Could not parse date '{raw}' as {format}: {reason}")]
pub struct DateParseWarning {
    pub raw: String,
    pub format: DateFormat,
    pub reason: String,
}

/// Parse `raw` against `format`. Surrounding whitespace is ignored.
pub fn normalize(raw: &str, format: DateFormat) -> Result<NormalizedTimestamp, DateParseWarning> {
    let trimmed = raw.trim();
    let parsed = if format.has_time() {
        NaiveDateTime::parse_from_str(trimmed, format.pattern())
    } else {
        NaiveDate::parse_from_str(trimmed, format.pattern()).map(|d| d.and_time(NaiveTime::MIN))
    };

    parsed.map(NormalizedTimestamp).map_err(|e| DateParseWarning {
        raw: raw.to_string(),
        format,
        reason: e.to_string(),
    })
}

/// Sort key for `raw`: the parsed timestamp, or the sentinel on failure
pub fn sort_key(raw: &str, format: DateFormat) -> NormalizedTimestamp {
    match normalize(raw, format) {
        Ok(ts) => ts,
        Err(warning) => {
            warn!(raw = %warning.raw, format = %warning.format, reason = %warning.reason, "Unparsable date, sorting as earliest");
            NormalizedTimestamp::EARLIEST
        }
    }
}

/// Render a news timestamp as `01/31/2024 03:45 PM`; unparsable input is returned as-is
pub fn format_news_time(raw: &str) -> String {
    match normalize(raw, DateFormat::IsoDateTime) {
        Ok(ts) => ts.datetime().format("%m/%d/%Y %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}
