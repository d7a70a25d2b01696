use std::fmt;

/// Stages of a release run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStep {
    ResolveLastTag,
    ValidateVersion,
    GatherCommitLog,
    GatherDiffStat,
    FetchFullDiff,
    Generate,
    WriteOutput,
    WriteChangelog,
    Commit,
    Tag,
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResolveLastTag => "resolve last tag",
            Self::ValidateVersion => "validate version",
            Self::GatherCommitLog => "gather commit log",
            Self::GatherDiffStat => "gather diff statistics",
            Self::FetchFullDiff => "fetch full diff",
            Self::Generate => "generate changelog",
            Self::WriteOutput => "write preview output",
            Self::WriteChangelog => "write changelog",
            Self::Commit => "commit changelog",
            Self::Tag => "create tag",
        };
        write!(f, "{s}")
    }
}
