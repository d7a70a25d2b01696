use thiserror::Error;

use crate::types::ReleaseStep;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] chronicle_git::GitError),

    #[error(transparent)]
    Changelog(#[from] chronicle_changelog::ChangelogError),

    #[error(transparent)]
    Version(#[from] chronicle_version::VersionError),

    #[error(transparent)]
    Generate(#[from] chronicle_ai::GenerateError),

    #[error("failed to open output")]
    OutputOpen(#[source] std::io::Error),

    #[error("failed to write generated changelog to output")]
    OutputWrite(#[source] std::io::Error),

    #[error("release failed at step '{step}'")]
    StepFailed {
        step: ReleaseStep,
        #[source]
        source: Box<OperationError>,
    },

    #[error(
        "release commit {commit_sha} was created but tagging '{tag}' failed; the commit was kept, create the tag manually"
    )]
    TagAfterCommit {
        tag: String,
        commit_sha: String,
        #[source]
        source: Box<OperationError>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

impl OperationError {
    /// Wraps a failure with the step it happened in.
    pub(crate) fn at(step: ReleaseStep) -> impl FnOnce(OperationError) -> OperationError {
        move |source| Self::StepFailed {
            step,
            source: Box::new(source),
        }
    }

    /// The step that failed, if the error came out of a release run.
    #[must_use]
    pub fn step(&self) -> Option<ReleaseStep> {
        match self {
            Self::StepFailed { step, .. } => Some(*step),
            Self::TagAfterCommit { .. } => Some(ReleaseStep::Tag),
            _ => None,
        }
    }
}
