//! Compact `YYYYMMDDHHMMSS` timestamps: ISO-8601 normalization, calendar
//! conversion and display helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::model::{CompactTimestamp, IsoTimestamp, TimestampPolicy};
use crate::utils::error::{IdentError, Result};

/// Field boundaries (character offsets) and the separator written before each field.
const FIELDS: [(usize, usize, &str); 6] = [
    (0, 4, ""),
    (4, 6, "-"),
    (6, 8, "-"),
    (8, 10, "T"),
    (10, 12, ":"),
    (12, 14, ":"),
];

const INVALID_DATE: &str = "Invalid Date";
const INVALID_INPUT: &str = "Invalid input";

/// Reformats a compact timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Fields are cut at fixed character offsets and never validated, so
/// `"20241340000000"` becomes `"2024-13-40T00:00:00Z"`. Short input yields
/// empty fields (`"2024"` becomes `"2024--T::Z"`); anything past the 14th
/// character is dropped. Input that is not 14 ASCII digits is logged and the
/// degraded string is returned anyway.
pub fn normalize(input: &str) -> String {
    if let Err(e) = CompactTimestamp::parse(input) {
        tracing::warn!("⚠️ Degrading malformed timestamp: {}", e);
    }

    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(20);
    for (start, end, sep) in FIELDS {
        out.push_str(sep);
        let end = end.min(chars.len());
        if start < end {
            out.extend(&chars[start..end]);
        }
    }
    out.push('Z');
    out
}

/// Like [`normalize`], but rejects anything that is not exactly 14 ASCII digits.
pub fn normalize_strict(input: &str) -> Result<IsoTimestamp> {
    let ts = CompactTimestamp::parse(input)?;
    Ok(IsoTimestamp::from(&ts))
}

pub fn normalize_with(policy: TimestampPolicy, input: &str) -> Result<String> {
    match policy {
        TimestampPolicy::Lenient => Ok(normalize(input)),
        TimestampPolicy::Strict => normalize_strict(input).map(|iso| iso.to_string()),
    }
}

impl CompactTimestamp {
    /// Calendar value of the timestamp, in UTC.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        // 每個欄位都是 ASCII 數字，parse 只會因溢位失敗
        let field = |s: &str| -> Result<u32> {
            s.parse::<u32>()
                .map_err(|e| IdentError::malformed("timestamp", self.as_str(), e.to_string()))
        };
        let year = self
            .year()
            .parse::<i32>()
            .map_err(|e| IdentError::malformed("timestamp", self.as_str(), e.to_string()))?;

        NaiveDate::from_ymd_opt(year, field(self.month())?, field(self.day())?)
            .and_then(|d| {
                d.and_hms_opt(
                    field(self.hour()).ok()?,
                    field(self.minute()).ok()?,
                    field(self.second()).ok()?,
                )
            })
            .map(|naive| naive.and_utc())
            .ok_or_else(|| IdentError::malformed("timestamp", self.as_str(), "not a calendar date"))
    }
}

/// Parses an RFC 3339 string, an offset-less `YYYY-MM-DDTHH:MM:SS[.f]`, a bare
/// `YYYY-MM-DD` or a compact timestamp into a UTC instant. Values without an
/// offset are read as UTC.
pub fn parse_any(timestamp: &str) -> Result<DateTime<Utc>> {
    if looks_like_rfc3339(timestamp) {
        return DateTime::parse_from_rfc3339(timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|e| {
                parse_naive(timestamp)
                    .map(|naive| naive.and_utc())
                    .ok_or_else(|| IdentError::malformed("timestamp", timestamp, e.to_string()))
            });
    }

    let compact: String = timestamp.chars().take(14).collect();
    CompactTimestamp::parse(&compact)?.to_datetime()
}

fn parse_naive(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)
        })
}

fn looks_like_rfc3339(timestamp: &str) -> bool {
    timestamp.contains(&['T', 'Z', '+', '-'][..])
}

/// Short UTC display such as `"Jan 15, 2024"`, or `"Jan 15, 2024, 14:30:22"`
/// when `show_full` is set.
///
/// Absent or empty input renders as `"-"`; anything unparsable as `"Invalid Date"`.
pub fn human_friendly(timestamp: Option<&str>, show_full: bool) -> String {
    let Some(timestamp) = timestamp.filter(|t| !t.is_empty()) else {
        return "-".to_string();
    };

    match parse_any(timestamp) {
        Ok(dt) if show_full => dt.format("%b %-d, %Y, %H:%M:%S").to_string(),
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(e) => {
            tracing::debug!("Cannot display timestamp: {}", e);
            INVALID_DATE.to_string()
        }
    }
}

/// Renders a compact timestamp or unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Non-numeric input is returned unchanged. A 14-digit value that is not a
/// real calendar instant (month 13, Feb 30) renders as `"Invalid input"`
/// instead of rolling over into the next month or year.
pub fn display_time(input: &str) -> String {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return input.to_string();
    }

    let parsed = if input.len() == 14 {
        CompactTimestamp::parse(input).and_then(|ts| ts.to_datetime()).ok()
    } else {
        input
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    };

    parsed
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| INVALID_INPUT.to_string())
}
