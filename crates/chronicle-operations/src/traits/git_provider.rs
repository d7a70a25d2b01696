use std::path::Path;

use chronicle_git::{CommitInfo, ReleaseRange, TagInfo};

use crate::Result;

/// Version-control queries and mutations needed by a release run.
///
/// Every call stands alone; implementations keep no session state between calls.
pub trait GitProvider: Send + Sync {
    /// Most recent tag reachable from HEAD, or `None` if the repository has no tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or tag lookup fails.
    fn last_tag(&self, repo_path: &Path) -> Result<Option<String>>;

    /// One `<short sha> <subject>` line per non-merge commit in the range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if either end of the range cannot be resolved.
    fn commit_log(&self, repo_path: &Path, range: &ReleaseRange) -> Result<Vec<String>>;

    /// # Errors
    ///
    /// Returns an error if the diff cannot be computed.
    fn diff_stat(&self, repo_path: &Path, range: &ReleaseRange) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the diff cannot be computed.
    fn full_diff(&self, repo_path: &Path, range: &ReleaseRange) -> Result<String>;

    /// Stages `files` and commits them with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if staging or committing fails.
    fn commit(&self, repo_path: &Path, message: &str, files: &[&Path]) -> Result<CommitInfo>;

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    fn create_tag(&self, repo_path: &Path, tag_name: &str, message: &str) -> Result<TagInfo>;
}
