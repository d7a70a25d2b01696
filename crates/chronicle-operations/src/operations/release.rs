use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chronicle_ai::ReleaseRequest;
use chronicle_changelog::{ChangelogEntry, UNRELEASED_HEADER, format_version_header};
use chronicle_git::{CommitInfo, ReleaseRange, TagInfo};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::Result;
use crate::diff_strategy::{DiffStrategy, count_changed_lines};
use crate::error::OperationError;
use crate::traits::{
    ChangelogGenerator, ChangelogWriteResult, ChangelogWriter, GitProvider, TextChunks,
};
use crate::types::ReleaseStep;

const HEAD: &str = "HEAD";

pub struct ReleaseInput {
    pub repo_path: PathBuf,
    /// Version to release. `None` runs a preview that only prints the entry.
    pub version: Option<String>,
    /// Largest changed-line count that still sends the full diff.
    pub max_diff_lines: usize,
    /// Changelog updated by a release. Ignored in preview mode.
    pub changelog_path: PathBuf,
    /// Date stamped into the version header.
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOutput {
    pub last_tag: Option<String>,
    pub strategy: DiffStrategy,
    pub changed_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutput {
    pub version: String,
    pub last_tag: Option<String>,
    pub strategy: DiffStrategy,
    pub changed_lines: usize,
    pub changelog: ChangelogWriteResult,
    pub commit: CommitInfo,
    pub tag: TagInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Preview(PreviewOutput),
    Released(ReleaseOutput),
}

/// Data gathered from the repository for one generation request.
struct Gathered {
    last_tag: Option<String>,
    strategy: DiffStrategy,
    changed_lines: usize,
    request: ReleaseRequest,
}

/// Drives one run: gather history, generate the entry, then either print it
/// or write, commit and tag it.
pub struct ReleaseOperation<G, A, C> {
    git_provider: G,
    generator: A,
    changelog_writer: C,
}

#[cfg(test)]
impl<G, A, C> ReleaseOperation<G, A, C> {
    pub(crate) fn git_provider(&self) -> &G {
        &self.git_provider
    }

    pub(crate) fn generator(&self) -> &A {
        &self.generator
    }

    pub(crate) fn changelog_writer(&self) -> &C {
        &self.changelog_writer
    }
}

impl<G, A, C> ReleaseOperation<G, A, C>
where
    G: GitProvider,
    A: ChangelogGenerator,
    C: ChangelogWriter,
{
    pub fn new(git_provider: G, generator: A, changelog_writer: C) -> Self {
        Self {
            git_provider,
            generator,
            changelog_writer,
        }
    }

    /// Runs the release.
    ///
    /// In preview mode the generated text is written to the writer returned
    /// by `open_preview` as it arrives, followed by a newline. The writer is
    /// only opened once generation has started, so a run that fails earlier
    /// leaves the destination untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::StepFailed`] naming the first step that
    /// failed, or [`OperationError::TagAfterCommit`] when the release commit
    /// was created but tagging it failed. Nothing is rolled back.
    pub fn execute<W, F>(&self, input: &ReleaseInput, open_preview: F) -> Result<ReleaseOutcome>
    where
        W: Write,
        F: FnOnce() -> io::Result<W>,
    {
        let last_tag = self.resolve_last_tag(&input.repo_path)?;

        if let Some(version) = input.version.as_deref() {
            chronicle_version::validate_new_version(version, last_tag.as_deref())
                .map_err(|e| OperationError::at(ReleaseStep::ValidateVersion)(e.into()))?;
        }

        let gathered = self.gather(input, last_tag)?;

        let chunks = self
            .generator
            .generate(&gathered.request)
            .map_err(OperationError::at(ReleaseStep::Generate))?;

        match input.version.as_deref() {
            None => {
                let mut out = open_preview().map_err(|e| {
                    OperationError::at(ReleaseStep::WriteOutput)(OperationError::OutputOpen(e))
                })?;
                stream_to_writer(chunks, &mut out)?;
                Ok(ReleaseOutcome::Preview(PreviewOutput {
                    last_tag: gathered.last_tag,
                    strategy: gathered.strategy,
                    changed_lines: gathered.changed_lines,
                }))
            }
            Some(version) => {
                let text = collect_text(chunks)?;
                self.finalize(input, version, &text, gathered)
                    .map(ReleaseOutcome::Released)
            }
        }
    }

    fn resolve_last_tag(&self, repo_path: &Path) -> Result<Option<String>> {
        let last_tag = self
            .git_provider
            .last_tag(repo_path)
            .map_err(OperationError::at(ReleaseStep::ResolveLastTag))?;

        match &last_tag {
            Some(tag) => info!(tag = %tag, "last release tag: {tag}"),
            None => info!("no prior release tags found; will diff entire history"),
        }

        Ok(last_tag)
    }

    fn gather(&self, input: &ReleaseInput, last_tag: Option<String>) -> Result<Gathered> {
        let repo_path = &input.repo_path;
        let range = ReleaseRange::new(last_tag.clone(), HEAD);

        let commits = self
            .git_provider
            .commit_log(repo_path, &range)
            .map_err(OperationError::at(ReleaseStep::GatherCommitLog))?;
        debug!(count = commits.len(), "collected commit log");

        let diff_stat = self
            .git_provider
            .diff_stat(repo_path, &range)
            .map_err(OperationError::at(ReleaseStep::GatherDiffStat))?;

        let changed_lines = count_changed_lines(&diff_stat);
        let strategy = DiffStrategy::select(changed_lines, input.max_diff_lines);

        let full_diff = if strategy.includes_full_diff() {
            let diff = self
                .git_provider
                .full_diff(repo_path, &range)
                .map_err(OperationError::at(ReleaseStep::FetchFullDiff))?;
            info!(changed_lines, "including full diff ({changed_lines} lines changed)");
            Some(diff)
        } else {
            info!(
                changed_lines,
                threshold = input.max_diff_lines,
                "stat-only mode ({changed_lines} lines changed, threshold {})",
                input.max_diff_lines
            );
            None
        };

        let version_header = match input.version.as_deref() {
            Some(version) => format_version_header(version, input.date),
            None => UNRELEASED_HEADER.to_string(),
        };

        let request = ReleaseRequest {
            from: range.from_label().to_string(),
            to: range.to().to_string(),
            version_header,
            commits,
            diff_stat,
            full_diff,
        };

        Ok(Gathered {
            last_tag,
            strategy,
            changed_lines,
            request,
        })
    }

    fn finalize(
        &self,
        input: &ReleaseInput,
        version: &str,
        text: &str,
        gathered: Gathered,
    ) -> Result<ReleaseOutput> {
        let entry = ChangelogEntry::new(text);

        let changelog = self
            .changelog_writer
            .write_entry(&input.changelog_path, &entry)
            .map_err(OperationError::at(ReleaseStep::WriteChangelog))?;
        info!(created = changelog.created, "updated {}", changelog.path.display());

        let message = format!("Release {version}");

        let commit = self
            .git_provider
            .commit(&input.repo_path, &message, &[changelog.path.as_path()])
            .map_err(OperationError::at(ReleaseStep::Commit))?;
        info!(sha = %commit.sha, "committed {}", changelog.path.display());

        let tag = self
            .git_provider
            .create_tag(&input.repo_path, version, &message)
            .map_err(|source| OperationError::TagAfterCommit {
                tag: version.to_string(),
                commit_sha: commit.sha.clone(),
                source: Box::new(source),
            })?;
        info!(target_sha = %tag.target_sha, "created tag {}", tag.name);

        Ok(ReleaseOutput {
            version: version.to_string(),
            last_tag: gathered.last_tag,
            strategy: gathered.strategy,
            changed_lines: gathered.changed_lines,
            changelog,
            commit,
            tag,
        })
    }
}

/// Feeds every chunk to `sink` in order, stopping at the first failure.
fn drain(chunks: TextChunks<'_>, mut sink: impl FnMut(&str) -> Result<()>) -> Result<()> {
    for chunk in chunks {
        let chunk = chunk.map_err(OperationError::at(ReleaseStep::Generate))?;
        sink(&chunk)?;
    }
    Ok(())
}

fn stream_to_writer(chunks: TextChunks<'_>, out: &mut impl Write) -> Result<()> {
    drain(chunks, |chunk| write_flushed(out, chunk.as_bytes()))?;
    write_flushed(out, b"\n")
}

fn write_flushed(out: &mut impl Write, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes)
        .and_then(|()| out.flush())
        .map_err(|e| OperationError::at(ReleaseStep::WriteOutput)(OperationError::OutputWrite(e)))
}

fn collect_text(chunks: TextChunks<'_>) -> Result<String> {
    let mut text = String::new();
    drain(chunks, |chunk| {
        text.push_str(chunk);
        Ok(())
    })?;
    Ok(text)
}
