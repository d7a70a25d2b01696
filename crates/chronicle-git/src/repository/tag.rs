use crate::{GitError, Result, TagInfo};

use super::Repository;

impl Repository {
    /// Name of the most recent tag reachable from HEAD, or `None` if the
    /// repository has no tags at all.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoReachableTag`] if tags exist but none is reachable from HEAD.
    pub fn last_tag(&self) -> Result<Option<String>> {
        if self.inner.tag_names(None)?.is_empty() {
            return Ok(None);
        }

        let head = self.inner.head()?.peel_to_commit()?;

        let mut options = git2::DescribeOptions::new();
        options.describe_tags();
        let description = head
            .as_object()
            .describe(&options)
            .map_err(GitError::NoReachableTag)?;

        let mut format = git2::DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(Some(description.format(Some(&format))?))
    }

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    pub fn create_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        let head = self.inner.head()?.peel_to_commit()?;
        let sig = self.inner.signature()?;

        self.inner
            .tag(name, head.as_object(), &sig, message, false)?;

        Ok(TagInfo {
            name: name.to_string(),
            target_sha: head.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_file, setup_test_repo};
    use crate::GitError;

    #[test]
    fn no_tags_is_not_an_error() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert_eq!(repo.last_tag()?, None);

        Ok(())
    }

    #[test]
    fn last_tag_is_nearest_to_head() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        repo.create_tag("v1.0.0", "Release v1.0.0")?;
        commit_file(&dir, &repo, "a.txt", "a", "Add a")?;
        repo.create_tag("v1.1.0", "Release v1.1.0")?;
        commit_file(&dir, &repo, "b.txt", "b", "Add b")?;

        assert_eq!(repo.last_tag()?, Some("v1.1.0".to_string()));

        Ok(())
    }

    #[test]
    fn lightweight_tags_are_found() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let head = repo.inner.head()?.peel_to_commit()?;
        repo.inner.tag_lightweight("0.3.0", head.as_object(), false)?;

        assert_eq!(repo.last_tag()?, Some("0.3.0".to_string()));

        Ok(())
    }

    #[test]
    fn unreachable_tags_are_reported() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.inner.index()?.write_tree()?;
        let tree = repo.inner.find_tree(tree_id)?;
        let orphan = repo.inner.commit(None, &sig, &sig, "Orphan", &tree, &[])?;
        let orphan = repo.inner.find_commit(orphan)?;
        repo.inner
            .tag("v9.9.9", orphan.as_object(), &sig, "Orphan tag", false)?;
        commit_file(&dir, &repo, "a.txt", "a", "Add a")?;

        let result = repo.last_tag();
        assert!(matches!(result, Err(GitError::NoReachableTag(_))));

        Ok(())
    }

    #[test]
    fn create_annotated_tag() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let tag_info = repo.create_tag("v1.0.0", "Release v1.0.0")?;

        assert_eq!(tag_info.name, "v1.0.0");

        let head = repo.inner.head()?.peel_to_commit()?;
        assert_eq!(tag_info.target_sha, head.id().to_string());

        let tag = repo.inner.find_reference("refs/tags/v1.0.0")?.peel_to_tag()?;
        assert_eq!(tag.message(), Some("Release v1.0.0"));

        Ok(())
    }

    #[test]
    fn duplicate_tag_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        repo.create_tag("v1.0.0", "First tag")?;
        let result = repo.create_tag("v1.0.0", "Duplicate tag");

        assert!(result.is_err());

        Ok(())
    }
}
