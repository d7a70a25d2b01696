/// Well-known id of git's empty tree, used as the diff base when there is no
/// previous release to compare against.
pub const EMPTY_TREE_SHA: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

const START_OF_HISTORY: &str = "the beginning of the repository";

/// The `from..to` span of history covered by a release.
///
/// An absent `from` means the whole history reachable from `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRange {
    from: Option<String>,
    to: String,
}

impl ReleaseRange {
    #[must_use]
    pub fn new(from: Option<String>, to: impl Into<String>) -> Self {
        Self {
            from,
            to: to.into(),
        }
    }

    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Revision to diff against: the `from` revision, or the empty tree.
    #[must_use]
    pub fn diff_base(&self) -> &str {
        self.from.as_deref().unwrap_or(EMPTY_TREE_SHA)
    }

    /// Human-readable name of the range start.
    #[must_use]
    pub fn from_label(&self) -> &str {
        self.from.as_deref().unwrap_or(START_OF_HISTORY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub target_sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
}
