use std::path::{Path, PathBuf};

use crate::Result;

use super::Repository;

impl Repository {
    /// Records each path in the index as it is on disk: files that exist are
    /// added, missing ones are removed. Relative paths are taken from the
    /// repository root.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::PathOutsideRepository`] before touching the
    /// index if any path lies outside the working tree, or a git error if
    /// staging fails.
    pub fn stage_files(&self, paths: &[&Path]) -> Result<()> {
        let relative = paths
            .iter()
            .map(|path| self.path_in_worktree(path))
            .collect::<Result<Vec<PathBuf>>>()?;

        let mut index = self.inner.index()?;
        for path in &relative {
            if self.root().join(path).exists() {
                index.add_path(path)?;
            } else {
                index.remove_path(path)?;
            }
        }
        index.write()?;

        Ok(())
    }
}
