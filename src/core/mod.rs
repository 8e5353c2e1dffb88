pub mod format;
pub mod label;
pub mod timestamp;
pub mod url_ident;

pub use crate::domain::model::{CompactTimestamp, HashStrategy, IsoTimestamp, TimestampPolicy};
pub use crate::domain::ports::{HashExtractor, Normalize};
pub use crate::utils::error::Result;
