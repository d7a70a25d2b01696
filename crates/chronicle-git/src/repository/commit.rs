use crate::{CommitInfo, Result};

use super::Repository;

impl Repository {
    /// Commits the current index on top of HEAD, using the configured
    /// `user.name` and `user.email` as author and committer.
    ///
    /// # Errors
    ///
    /// Returns an error if no identity is configured or the commit cannot be
    /// written.
    pub fn commit(&self, message: &str) -> Result<CommitInfo> {
        let signature = self.inner.signature()?;
        let tree_id = self.inner.index()?.write_tree()?;
        let tree = self.inner.find_tree(tree_id)?;

        let parent = self.head_commit()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        Ok(CommitInfo {
            sha: oid.to_string(),
            message: message.to_string(),
        })
    }

    /// The commit HEAD points at, or `None` on a branch with no commits yet.
    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.inner.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
