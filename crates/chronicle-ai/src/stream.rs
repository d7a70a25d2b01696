use std::io::BufRead;
use std::iter::FusedIterator;

use serde::Deserialize;

use crate::{GenerateError, Result};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamEvent {
    ContentBlockDelta {
        delta: Delta,
    },
    MessageStop,
    Error {
        error: ErrorDetail,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Delta {
    TextDelta {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) message: String,
}

/// Text fragments decoded from a Messages API server-sent event stream.
///
/// Yields each `text_delta` as it arrives and ends at `message_stop`. An
/// `error` event, unreadable input, or input that ends before
/// `message_stop` is yielded once as an error, after which the stream is
/// exhausted.
pub struct TextStream<R> {
    reader: R,
    line: String,
    finished: bool,
}

impl<R: BufRead> TextStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            finished: false,
        }
    }

    /// Data payload of the next event, or `None` at end of input.
    fn next_event(&mut self) -> Result<Option<String>> {
        let mut data = String::new();

        loop {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(GenerateError::Read)?;

            if read == 0 {
                return Ok((!data.is_empty()).then_some(data));
            }

            let line = self.line.trim_end_matches(['\r', '\n']);

            if line.is_empty() {
                if data.is_empty() {
                    continue;
                }
                return Ok(Some(data));
            }

            if let Some(value) = line.strip_prefix("data:") {
                if !data.is_empty() {
                    data.push('\n');
                }
                data.push_str(value.strip_prefix(' ').unwrap_or(value));
            }
        }
    }

    fn fail(&mut self, error: GenerateError) -> Option<Result<String>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl<R: BufRead> Iterator for TextStream<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let data = match self.next_event() {
                Ok(Some(data)) => data,
                Ok(None) => return self.fail(GenerateError::Truncated),
                Err(e) => return self.fail(e),
            };

            match serde_json::from_str::<StreamEvent>(&data) {
                Ok(StreamEvent::ContentBlockDelta {
                    delta: Delta::TextDelta { text },
                }) if !text.is_empty() => return Some(Ok(text)),
                Ok(StreamEvent::MessageStop) => {
                    self.finished = true;
                    return None;
                }
                Ok(StreamEvent::Error { error }) => {
                    return self.fail(GenerateError::Stream {
                        kind: error.kind,
                        message: error.message,
                    });
                }
                Ok(_) => {}
                Err(e) => return self.fail(GenerateError::Decode(e)),
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TextStream<R> {}
