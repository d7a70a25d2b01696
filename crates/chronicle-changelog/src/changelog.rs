use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::entry::ChangelogEntry;
use crate::error::ChangelogError;
use crate::format::CHANGELOG_HEADER;

const SECTION_MARKER: &str = "\n## [";

/// Inserts `entry` as the newest release section of `existing`.
///
/// An absent or empty document becomes the standard header followed by the
/// entry. Otherwise the entry goes right before the first `## [` section line,
/// separated by one blank line on each side, or after the existing content
/// when there is no section yet. Section bodies are never inspected, so
/// merging the same entry twice yields two sections.
#[must_use]
pub fn merge(existing: Option<&str>, entry: &ChangelogEntry) -> String {
    let Some(content) = existing.filter(|content| !content.is_empty()) else {
        return format!("{CHANGELOG_HEADER}\n{entry}");
    };

    let Some(marker) = content.find(SECTION_MARKER) else {
        return format!("{}\n\n{entry}", content.trim_end_matches('\n'));
    };

    let before = content[..marker].trim_end_matches('\n');
    let after = content[marker + 1..].trim_end_matches('\n');

    format!("{before}\n\n{entry}\n{after}\n")
}

/// In-memory text of a changelog file. The default value is an empty
/// document, which gains the standard header with its first entry.
#[derive(Debug, Clone, Default)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    /// Reads the changelog at `path`; a missing file yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file exists but cannot be read.
    pub fn read_optional(path: &Path) -> Result<Option<Self>, ChangelogError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self { content })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Inserts `entry` as the newest release section, see [`merge`].
    pub fn add_entry(&mut self, entry: &ChangelogEntry) {
        self.content = merge(Some(&self.content), entry);
    }

    /// Replaces the file at `path` as a whole: the content is written to a
    /// temporary file in the same directory which is then renamed over it.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        let write_error = |source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(self.content.as_bytes()).map_err(write_error)?;
        if let Some(permissions) = target_permissions(path) {
            file.as_file()
                .set_permissions(permissions)
                .map_err(write_error)?;
        }
        file.persist(path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

// Temporary files are created owner-only; keep the mode of the file being
// replaced, or use the usual 0644 for a new one.
fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(metadata) = std::fs::metadata(path) {
        return Some(metadata.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }

    #[cfg(not(unix))]
    {
        None
    }
}
