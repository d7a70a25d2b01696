use chronicle_ai::{AnthropicClient, ReleaseRequest};
use tracing::debug;

use crate::Result;
use crate::traits::{ChangelogGenerator, TextChunks};

/// Generates changelog text with the Anthropic Messages API.
pub struct AnthropicGenerator {
    client: AnthropicClient,
}

impl AnthropicGenerator {
    #[must_use]
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }
}

impl ChangelogGenerator for AnthropicGenerator {
    fn generate(&self, request: &ReleaseRequest) -> Result<TextChunks<'_>> {
        debug!(model = self.client.model(), "starting changelog generation");
        let stream = self.client.stream(request)?;
        Ok(Box::new(stream.map(|chunk| chunk.map_err(Into::into))))
    }
}
