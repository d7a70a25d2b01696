use crate::{ReleaseRange, Result};

use super::Repository;

impl Repository {
    /// One-line commit messages (`<short sha> <summary>`) in the range, newest
    /// first, with merge commits left out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::RefNotFound`] if either end of the range cannot be resolved.
    pub fn commit_log(&self, range: &ReleaseRange) -> Result<Vec<String>> {
        let mut walk = self.inner.revwalk()?;
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        walk.push(self.resolve_commit(range.to())?.id())?;

        if let Some(from) = range.from() {
            walk.hide(self.resolve_commit(from)?.id())?;
        }

        let mut messages = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                continue;
            }

            let short_id = commit.as_object().short_id()?;
            let short_id = String::from_utf8_lossy(&short_id);
            let summary = String::from_utf8_lossy(commit.summary_bytes().unwrap_or_default());

            messages.push(format!("{short_id} {summary}"));
        }

        Ok(messages)
    }
}
