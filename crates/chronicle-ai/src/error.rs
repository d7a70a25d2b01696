use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to '{url}' failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("streaming error: {kind}: {message}")]
    Stream { kind: String, message: String },

    #[error("failed to read response stream")]
    Read(#[source] std::io::Error),

    #[error("malformed stream event")]
    Decode(#[source] serde_json::Error),

    #[error("response stream ended before the message was complete")]
    Truncated,
}
