use std::path::Path;

use chronicle_git::{CommitInfo, ReleaseRange, Repository, TagInfo};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn last_tag(&self, repo_path: &Path) -> Result<Option<String>> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.last_tag()?)
    }

    fn commit_log(&self, repo_path: &Path, range: &ReleaseRange) -> Result<Vec<String>> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.commit_log(range)?)
    }

    fn diff_stat(&self, repo_path: &Path, range: &ReleaseRange) -> Result<String> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.diff_stat(range)?)
    }

    fn full_diff(&self, repo_path: &Path, range: &ReleaseRange) -> Result<String> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.full_diff(range)?)
    }

    fn commit(&self, repo_path: &Path, message: &str, files: &[&Path]) -> Result<CommitInfo> {
        let repo = Repository::open(repo_path)?;
        repo.stage_files(files)?;
        Ok(repo.commit(message)?)
    }

    fn create_tag(&self, repo_path: &Path, tag_name: &str, message: &str) -> Result<TagInfo> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.create_tag(tag_name, message)?)
    }
}
