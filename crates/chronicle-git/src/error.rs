use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("repository at '{path}' has no working tree")]
    BareRepository { path: PathBuf },

    #[error("'{path}' is outside the repository at '{root}'")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound {
        refspec: String,
        #[source]
        source: git2::Error,
    },

    #[error("no tag is reachable from HEAD")]
    NoReachableTag(#[source] git2::Error),
}
