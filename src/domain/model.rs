use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::error::{IdentError, Result};

/// Number of characters in a `YYYYMMDDHHMMSS` timestamp.
pub const COMPACT_TIMESTAMP_LEN: usize = 14;

/// A validated `YYYYMMDDHHMMSS` timestamp (implicitly UTC).
///
/// Only the shape is checked: 14 ASCII digits. Calendar validity is checked
/// separately by [`CompactTimestamp::to_datetime`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompactTimestamp(String);

impl CompactTimestamp {
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() != COMPACT_TIMESTAMP_LEN {
            return Err(IdentError::malformed(
                "timestamp",
                input,
                format!("expected {} digits, got {} bytes", COMPACT_TIMESTAMP_LEN, input.len()),
            ));
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentError::malformed(
                "timestamp",
                input,
                "contains non-digit characters",
            ));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> &str {
        &self.0[0..4]
    }

    pub fn month(&self) -> &str {
        &self.0[4..6]
    }

    pub fn day(&self) -> &str {
        &self.0[6..8]
    }

    pub fn hour(&self) -> &str {
        &self.0[8..10]
    }

    pub fn minute(&self) -> &str {
        &self.0[10..12]
    }

    pub fn second(&self) -> &str {
        &self.0[12..14]
    }
}

impl TryFrom<String> for CompactTimestamp {
    type Error = IdentError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CompactTimestamp> for String {
    fn from(value: CompactTimestamp) -> Self {
        value.0
    }
}

impl fmt::Display for CompactTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `YYYY-MM-DDTHH:MM:SSZ`, derived from a [`CompactTimestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IsoTimestamp(String);

impl IsoTimestamp {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&CompactTimestamp> for IsoTimestamp {
    fn from(ts: &CompactTimestamp) -> Self {
        Self(format!(
            "{}-{}-{}T{}:{}:{}Z",
            ts.year(),
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute(),
            ts.second()
        ))
    }
}

impl fmt::Display for IsoTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How malformed compact timestamps are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TimestampPolicy {
    /// Degrade to a malformed string and log a warning.
    #[default]
    Lenient,
    /// Reject anything that is not 14 ASCII digits.
    Strict,
}

/// Which URL hash extraction strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HashStrategy {
    /// Only `/files/<hex>` segments.
    #[default]
    Pattern,
    /// Last path segment of any absolute URL.
    PathTail,
}

/// Primitive values allowed in a log metadata bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Str(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Str(v)
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        MetaValue::Bool(v)
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<usize> for MetaValue {
    fn from(v: usize) -> Self {
        i64::try_from(v).map(MetaValue::Int).unwrap_or(MetaValue::Float(v as f64))
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        MetaValue::Float(v)
    }
}

impl<T: Into<MetaValue>> From<Option<T>> for MetaValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(MetaValue::Null)
    }
}

pub type LogMeta = BTreeMap<String, MetaValue>;
