//! Applies one identifier operation to every line of an input stream.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::core::format::{address_for_filename, AddressFormat};
use crate::core::{label, timestamp, url_ident};
use crate::domain::model::{CompactTimestamp, HashStrategy, LogMeta, TimestampPolicy};
use crate::domain::ports::Normalize;
use crate::utils::error::{IdentError, Result};
use crate::utils::logger::log_with_meta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OperationKind {
    /// Compact timestamp to ISO-8601
    Timestamp,
    /// Timestamp as "Jan 15, 2024"
    HumanDate,
    /// Timestamp as "Jan 15, 2024, 14:30:22"
    HumanDateTime,
    /// Compact timestamp or unix seconds as "YYYY-MM-DD HH:MM:SS"
    DisplayTime,
    /// Content hash from a URL
    FileHash,
    Capitalize,
    TitleCase,
    ReadableWord,
    StripHex,
    EnsureHex,
    /// Shortened crypto address
    Address,
    /// Filename fragment derived from an address
    AddressFilename,
}

/// An [`OperationKind`] plus the settings it depends on.
#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub policy: TimestampPolicy,
    pub strategy: HashStrategy,
    pub address: AddressFormat,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            policy: TimestampPolicy::default(),
            strategy: HashStrategy::default(),
            address: AddressFormat::default(),
        }
    }

    pub fn with_policy(mut self, policy: TimestampPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_strategy(mut self, strategy: HashStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_address_format(mut self, address: AddressFormat) -> Self {
        self.address = address;
        self
    }

    /// True when lenient timestamp handling had to degrade this input.
    fn degrades(&self, input: &str) -> bool {
        self.kind == OperationKind::Timestamp
            && self.policy == TimestampPolicy::Lenient
            && CompactTimestamp::parse(input).is_err()
    }
}

impl Normalize for Operation {
    fn normalize(&self, input: &str) -> Result<Option<String>> {
        let output = match self.kind {
            OperationKind::Timestamp => Some(timestamp::normalize_with(self.policy, input)?),
            OperationKind::HumanDate => Some(timestamp::human_friendly(Some(input), false)),
            OperationKind::HumanDateTime => Some(timestamp::human_friendly(Some(input), true)),
            OperationKind::DisplayTime => Some(timestamp::display_time(input)),
            OperationKind::FileHash => url_ident::extractor_for(self.strategy).extract(input),
            OperationKind::Capitalize => Some(label::capitalize_words(input)),
            OperationKind::TitleCase => Some(label::title_case_from_underscored(input)),
            OperationKind::ReadableWord => label::readable_word_from_underscored(Some(input)),
            OperationKind::StripHex => Some(label::strip_hex_prefix(input).to_string()),
            OperationKind::EnsureHex => Some(label::ensure_hex_prefix(input)),
            OperationKind::Address => Some(self.address.apply(Some(input))),
            OperationKind::AddressFilename => Some(address_for_filename(Some(input))),
        };
        Ok(output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub input: String,
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub absent: usize,
    pub degraded: usize,
    pub rejected: usize,
}

pub struct BatchRunner {
    operation: Operation,
    json: bool,
}

impl BatchRunner {
    pub fn new(operation: Operation, json: bool) -> Self {
        Self { operation, json }
    }

    pub fn apply(&self, input: &str) -> BatchRecord {
        match self.operation.normalize(input) {
            Ok(output) => BatchRecord {
                input: input.to_string(),
                output,
                error: None,
            },
            Err(e) => BatchRecord {
                input: input.to_string(),
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Processes every non-blank line; a rejected line never stops the run.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD so the line is
    /// still processed.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let input = line.trim_end_matches('\n').trim_end_matches('\r');
            if input.trim().is_empty() {
                continue;
            }
            self.process(input, &mut summary, &mut writer)?;
        }

        self.finish(summary, writer)
    }

    /// Same as [`BatchRunner::run`] for values that are already split.
    pub fn run_values<W: Write>(&self, inputs: &[String], mut writer: W) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for input in inputs {
            self.process(input, &mut summary, &mut writer)?;
        }
        self.finish(summary, writer)
    }

    fn process<W: Write>(&self, input: &str, summary: &mut BatchSummary, writer: &mut W) -> Result<()> {
        let record = self.apply(input);
        summary.processed += 1;
        if record.error.is_some() {
            summary.rejected += 1;
        } else if record.output.is_none() {
            summary.absent += 1;
        } else if self.operation.degrades(input) {
            summary.degraded += 1;
        }

        self.write_record(writer, &record)
    }

    fn finish<W: Write>(&self, summary: BatchSummary, mut writer: W) -> Result<BatchSummary> {
        writer.flush()?;

        let mut meta = LogMeta::new();
        meta.insert("operation".into(), format!("{:?}", self.operation.kind).into());
        meta.insert("processed".into(), summary.processed.into());
        meta.insert("absent".into(), summary.absent.into());
        meta.insert("degraded".into(), summary.degraded.into());
        meta.insert("rejected".into(), summary.rejected.into());
        log_with_meta(tracing::Level::DEBUG, "Batch finished", &meta);

        Ok(summary)
    }

    fn write_record<W: Write>(&self, writer: &mut W, record: &BatchRecord) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut *writer, record)?;
            writeln!(writer)?;
            return Ok(());
        }

        if let Some(error) = &record.error {
            tracing::warn!("❌ {}", error);
        }
        writeln!(writer, "{}", record.output.as_deref().unwrap_or_default())
            .map_err(IdentError::from)
    }
}
