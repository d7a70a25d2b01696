//! Text generation for changelog entries.
//!
//! A [`ReleaseRequest`] is rendered into a prompt and sent to the Anthropic
//! Messages API with streaming enabled. The reply arrives as a [`TextStream`]:
//! a lazy, finite sequence of text fragments that can only be consumed once.

mod client;
mod error;
mod prompt;
mod stream;

pub use client::{AnthropicClient, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use error::GenerateError;
pub use prompt::{ReleaseRequest, build_user_prompt, system_prompt};
pub use stream::TextStream;

pub type Result<T> = std::result::Result<T, GenerateError>;
