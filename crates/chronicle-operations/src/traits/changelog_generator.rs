use chronicle_ai::ReleaseRequest;

use crate::Result;

/// Lazily produced fragments of generated changelog text.
pub type TextChunks<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

pub trait ChangelogGenerator: Send + Sync {
    /// Starts generation and returns the text as it arrives.
    ///
    /// The sequence is finite and can be consumed once. An error item ends it.
    ///
    /// # Errors
    ///
    /// Returns an error if generation cannot be started.
    fn generate(&self, request: &ReleaseRequest) -> Result<TextChunks<'_>>;
}
