pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::FileConfig;

pub use crate::app::{BatchRunner, Operation, OperationKind};
pub use crate::core::format::{
    address_for_filename, format_bytes, format_crypto_address, human_readable_file_size,
    AddressFormat,
};
pub use crate::core::label::{
    capitalize_words, ensure_hex_prefix, readable_word_from_underscored, strip_hex_prefix,
    title_case_from_underscored,
};
pub use crate::core::timestamp::{display_time, human_friendly, normalize, normalize_strict, normalize_with};
pub use crate::core::url_ident::{
    extract_file_hash, extractor_for, file_hash_from_url, is_http_url, is_valid_url,
    try_extract_file_hash, PathTailExtractor, PatternExtractor,
};
pub use crate::domain::model::{CompactTimestamp, HashStrategy, IsoTimestamp, LogMeta, MetaValue, TimestampPolicy};
pub use crate::domain::ports::{HashExtractor, Normalize};
pub use crate::utils::error::{IdentError, Result};
