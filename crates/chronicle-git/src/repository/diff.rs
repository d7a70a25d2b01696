use crate::{EMPTY_TREE_SHA, GitError, ReleaseRange, Result};

use super::Repository;

const STAT_WIDTH: usize = 80;

impl Repository {
    /// `git diff --stat` style summary of the range, ending with the
    /// `N files changed, X insertions(+), Y deletions(-)` line.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either end of the range cannot be resolved.
    pub fn diff_stat(&self, range: &ReleaseRange) -> Result<String> {
        let diff = self.range_diff(range)?;
        let stats = diff.stats()?;
        let buf = stats.to_buf(git2::DiffStatsFormat::FULL, STAT_WIDTH)?;

        Ok(String::from_utf8_lossy(&buf).trim_end_matches('\n').to_string())
    }

    /// Uncoloured unified patch for the range.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either end of the range cannot be resolved.
    pub fn full_diff(&self, range: &ReleaseRange) -> Result<String> {
        let diff = self.range_diff(range)?;

        let mut patch = Vec::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                let mut origin = [0; 4];
                patch.extend_from_slice(line.origin().encode_utf8(&mut origin).as_bytes());
            }
            patch.extend_from_slice(line.content());
            true
        })?;

        Ok(String::from_utf8_lossy(&patch).trim_end_matches('\n').to_string())
    }

    fn range_diff(&self, range: &ReleaseRange) -> Result<git2::Diff<'_>> {
        let base_tree = self.resolve_base_tree(range.diff_base())?;
        let head_tree = self.resolve_tree(range.to())?;

        Ok(self
            .inner
            .diff_tree_to_tree(base_tree.as_ref(), Some(&head_tree), None)?)
    }

    fn resolve_base_tree(&self, refspec: &str) -> Result<Option<git2::Tree<'_>>> {
        if refspec == EMPTY_TREE_SHA {
            return Ok(None);
        }
        self.resolve_tree(refspec).map(Some)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        self.inner
            .revparse_single(refspec)
            .and_then(|object| object.peel_to_tree())
            .map_err(|source| GitError::RefNotFound {
                refspec: refspec.to_string(),
                source,
            })
    }
}
