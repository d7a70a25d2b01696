use std::path::{Path, PathBuf};

use chronicle_changelog::ChangelogEntry;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogWriteResult {
    pub path: PathBuf,
    pub created: bool,
}

pub trait ChangelogWriter: Send + Sync {
    /// Merges `entry` into the changelog at `changelog_path`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read or written.
    fn write_entry(
        &self,
        changelog_path: &Path,
        entry: &ChangelogEntry,
    ) -> Result<ChangelogWriteResult>;
}
