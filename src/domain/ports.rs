use crate::utils::error::Result;

/// Pulls a content identifier out of a URL.
///
/// Implementations never fail; an unrecognized URL yields `None`.
pub trait HashExtractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, url: &str) -> Option<String>;
}

/// A single string-to-string operation that may reject its input.
pub trait Normalize: Send + Sync {
    fn normalize(&self, input: &str) -> Result<Option<String>>;
}
