mod commit;
mod diff;
mod log;
mod staging;
mod tag;

use std::path::{Component, Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Opens the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if no repository contains the path,
    /// or [`GitError::BareRepository`] if it has no working tree.
    pub fn open(path: &Path) -> Result<Self> {
        let inner =
            git2::Repository::discover(path).map_err(|source| GitError::NotARepository {
                path: path.to_path_buf(),
                source,
            })?;

        let Some(workdir) = inner.workdir() else {
            return Err(GitError::BareRepository {
                path: path.to_path_buf(),
            });
        };
        // Symlinks are resolved so absolute paths can be matched against the root.
        let root = dunce::canonicalize(workdir)
            .unwrap_or_else(|_| dunce::simplified(workdir).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `path` as the index expects it: relative to the working tree root.
    /// Relative paths are taken to be relative to the root already.
    pub(crate) fn path_in_worktree(&self, path: &Path) -> Result<PathBuf> {
        let outside = || GitError::PathOutsideRepository {
            path: path.to_path_buf(),
            root: self.root.clone(),
        };

        if path.is_relative() {
            if path.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(outside());
            }
            return Ok(path.to_path_buf());
        }

        if let Ok(relative) = dunce::simplified(path).strip_prefix(&self.root) {
            return Ok(relative.to_path_buf());
        }

        // The file may not exist yet, so only its directory is resolved.
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return Err(outside());
        };
        dunce::canonicalize(parent)
            .ok()
            .and_then(|parent| {
                parent
                    .strip_prefix(&self.root)
                    .ok()
                    .map(|relative| relative.join(name))
            })
            .ok_or_else(outside)
    }

    pub(crate) fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        self.inner
            .revparse_single(refspec)
            .and_then(|object| object.peel_to_commit())
            .map_err(|source| GitError::RefNotFound {
                refspec: refspec.to_string(),
                source,
            })
    }
}
