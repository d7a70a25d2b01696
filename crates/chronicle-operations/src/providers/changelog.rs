use std::path::Path;

use chronicle_changelog::{Changelog, ChangelogEntry};

use crate::Result;
use crate::traits::{ChangelogWriteResult, ChangelogWriter};

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn write_entry(
        &self,
        changelog_path: &Path,
        entry: &ChangelogEntry,
    ) -> Result<ChangelogWriteResult> {
        let existing = Changelog::read_optional(changelog_path)?;
        let created = existing.is_none();

        let mut changelog = existing.unwrap_or_default();
        changelog.add_entry(entry);
        changelog.write_to_file(changelog_path)?;

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}
