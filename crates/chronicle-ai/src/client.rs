use std::io::BufReader;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::{ReleaseRequest, build_user_prompt, system_prompt};
use crate::stream::{ErrorDetail, TextStream};
use crate::{GenerateError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Blocking client for the streaming Messages endpoint.
pub struct AnthropicClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`GenerateError::Client`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        // A streamed reply can take minutes.
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("chronicle/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(GenerateError::Client)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    /// Sends the request and returns the reply as it streams in.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Request`] if the request cannot be sent and
    /// [`GenerateError::Api`] if the API answers with a non-success status.
    pub fn stream(
        &self,
        request: &ReleaseRequest,
    ) -> Result<TextStream<BufReader<reqwest::blocking::Response>>> {
        let system = system_prompt();
        let prompt = build_user_prompt(request);
        let url = self.url();

        let body = MessagesBody {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: &system,
            messages: [Message {
                role: "user",
                content: &prompt,
            }],
            stream: true,
        };

        debug!(
            url = %url,
            model = %self.model,
            max_tokens = self.max_tokens,
            prompt_bytes = prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .json(&body)
            .send()
            .map_err(|source| GenerateError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map_or(text, |body| format!("{}: {}", body.error.kind, body.error.message));
            return Err(GenerateError::Api {
                status: status.to_string(),
                message,
            });
        }

        Ok(TextStream::new(BufReader::new(response)))
    }
}
