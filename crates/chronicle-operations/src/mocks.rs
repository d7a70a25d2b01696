use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chronicle_ai::{GenerateError, ReleaseRequest};
use chronicle_changelog::{ChangelogEntry, merge};
use chronicle_git::{CommitInfo, GitError, ReleaseRange, TagInfo};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangelogGenerator, ChangelogWriteResult, ChangelogWriter, GitProvider, TextChunks,
};

pub const MOCK_COMMIT_SHA: &str = "0123456789abcdef0123456789abcdef01234567";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    LastTag,
    CommitLog { from: Option<String> },
    DiffStat { from: Option<String> },
    FullDiff { from: Option<String> },
    Commit { message: String, files: Vec<PathBuf> },
    CreateTag { name: String, message: String },
}

fn mock_failure(what: &str) -> OperationError {
    OperationError::Git(GitError::Git(git2::Error::from_str(&format!(
        "mock {what} failure"
    ))))
}

#[derive(Default)]
pub struct MockGitProvider {
    last_tag: Option<String>,
    commits: Vec<String>,
    diff_stat: String,
    full_diff: String,
    fail_last_tag: bool,
    fail_commit: bool,
    fail_tag: bool,
    calls: Mutex<Vec<GitCall>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_last_tag(mut self, tag: &str) -> Self {
        self.last_tag = Some(tag.to_string());
        self
    }

    #[must_use]
    pub fn with_commits(mut self, commits: &[&str]) -> Self {
        self.commits = commits.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_diff_stat(mut self, stat: &str) -> Self {
        self.diff_stat = stat.to_string();
        self
    }

    #[must_use]
    pub fn with_full_diff(mut self, diff: &str) -> Self {
        self.full_diff = diff.to_string();
        self
    }

    #[must_use]
    pub fn failing_on_last_tag(mut self) -> Self {
        self.fail_last_tag = true;
        self
    }

    #[must_use]
    pub fn failing_on_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    #[must_use]
    pub fn failing_on_tag(mut self) -> Self {
        self.fail_tag = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned.
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl GitProvider for MockGitProvider {
    fn last_tag(&self, _repo_path: &Path) -> Result<Option<String>> {
        self.record(GitCall::LastTag);
        if self.fail_last_tag {
            return Err(mock_failure("last tag"));
        }
        Ok(self.last_tag.clone())
    }

    fn commit_log(&self, _repo_path: &Path, range: &ReleaseRange) -> Result<Vec<String>> {
        self.record(GitCall::CommitLog {
            from: range.from().map(str::to_string),
        });
        Ok(self.commits.clone())
    }

    fn diff_stat(&self, _repo_path: &Path, range: &ReleaseRange) -> Result<String> {
        self.record(GitCall::DiffStat {
            from: range.from().map(str::to_string),
        });
        Ok(self.diff_stat.clone())
    }

    fn full_diff(&self, _repo_path: &Path, range: &ReleaseRange) -> Result<String> {
        self.record(GitCall::FullDiff {
            from: range.from().map(str::to_string),
        });
        Ok(self.full_diff.clone())
    }

    fn commit(&self, _repo_path: &Path, message: &str, files: &[&Path]) -> Result<CommitInfo> {
        self.record(GitCall::Commit {
            message: message.to_string(),
            files: files.iter().map(|f| f.to_path_buf()).collect(),
        });
        if self.fail_commit {
            return Err(mock_failure("commit"));
        }
        Ok(CommitInfo {
            sha: MOCK_COMMIT_SHA.to_string(),
            message: message.to_string(),
        })
    }

    fn create_tag(&self, _repo_path: &Path, tag_name: &str, message: &str) -> Result<TagInfo> {
        self.record(GitCall::CreateTag {
            name: tag_name.to_string(),
            message: message.to_string(),
        });
        if self.fail_tag {
            return Err(mock_failure("tag"));
        }
        Ok(TagInfo {
            name: tag_name.to_string(),
            target_sha: MOCK_COMMIT_SHA.to_string(),
        })
    }
}

/// Replays scripted chunks and records every request it receives.
#[derive(Default)]
pub struct MockGenerator {
    chunks: Vec<String>,
    fail_on_start: bool,
    fail_after_chunks: bool,
    requests: Mutex<Vec<ReleaseRequest>>,
}

impl MockGenerator {
    #[must_use]
    pub fn new(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_on_start(mut self) -> Self {
        self.fail_on_start = true;
        self
    }

    /// Ends the stream with an error once all chunks were delivered.
    #[must_use]
    pub fn failing_after_chunks(mut self) -> Self {
        self.fail_after_chunks = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the request log mutex is poisoned.
    pub fn requests(&self) -> Vec<ReleaseRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

impl ChangelogGenerator for MockGenerator {
    fn generate(&self, request: &ReleaseRequest) -> Result<TextChunks<'_>> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());

        if self.fail_on_start {
            return Err(GenerateError::Api {
                status: "401 Unauthorized".to_string(),
                message: "authentication_error: invalid x-api-key".to_string(),
            }
            .into());
        }

        let chunks = self.chunks.iter().cloned().map(Ok::<_, OperationError>);
        let tail: Option<Result<String>> = self
            .fail_after_chunks
            .then(|| Err(GenerateError::Truncated.into()));

        Ok(Box::new(chunks.chain(tail)))
    }
}

/// Keeps changelog files in memory, merging entries like the real writer.
#[derive(Default)]
pub struct MockChangelogWriter {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the file map mutex is poisoned.
    #[must_use]
    pub fn with_existing(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path.into(), content.to_string());
        self
    }

    /// Content of `path` if an entry was written to it.
    ///
    /// # Panics
    ///
    /// Panics if the file map mutex is poisoned.
    pub fn written(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("lock poisoned").get(path).cloned()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn write_entry(
        &self,
        changelog_path: &Path,
        entry: &ChangelogEntry,
    ) -> Result<ChangelogWriteResult> {
        let mut files = self.files.lock().expect("lock poisoned");
        let existing = files.get(changelog_path).map(String::as_str);
        let created = existing.is_none();
        let merged = merge(existing, entry);
        files.insert(changelog_path.to_path_buf(), merged);

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}
