use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] chronicle_operations::OperationError),

    #[error("failed to set up the Anthropic client")]
    Client(#[from] chronicle_ai::GenerateError),

    #[error("no API key provided; set --api-key or $ANTHROPIC_API_KEY")]
    MissingApiKey,

    #[error("repo path '{}' not accessible", path.display())]
    RepoNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve output path")]
    OutputPath(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
