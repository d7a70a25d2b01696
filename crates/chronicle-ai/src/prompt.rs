use std::fmt::Write;

use chronicle_changelog::ChangeCategory;

/// Everything the model is told about one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Human-readable start of the range, e.g. a tag name.
    pub from: String,
    pub to: String,
    /// Exact section header the entry must start with.
    pub version_header: String,
    /// One-line commit messages, newest first.
    pub commits: Vec<String>,
    pub diff_stat: String,
    /// `None` in stat-only mode.
    pub full_diff: Option<String>,
}

/// Fixed instructions describing the Keep a Changelog output format.
#[must_use]
pub fn system_prompt() -> String {
    let sections = ChangeCategory::ALL
        .iter()
        .map(|category| format!("### {category}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a technical writer that generates git release changelogs in Keep a Changelog format (https://keepachangelog.com/).

Rules:
- Use the exact version header provided in the request
- Use these H3 sections (only include non-empty ones): {sections}
- Each item is a bullet point written in past tense (e.g., \"Added support for X\", \"Fixed bug in Y\")
- Be concise and factual; do not invent or hallucinate changes not present in the provided information
- No preamble, commentary, or text outside the changelog structure
- Output only the changelog markdown, nothing else"
    )
}

#[must_use]
pub fn build_user_prompt(request: &ReleaseRequest) -> String {
    let mut prompt = String::new();

    let _ = write!(
        prompt,
        "Generate a changelog for the changes from `{}` to `{}`.\n\nVersion header to use: {}\n\n",
        request.from, request.to, request.version_header
    );

    if !request.commits.is_empty() {
        prompt.push_str("## Commit Messages\n\n");
        for commit in &request.commits {
            let _ = writeln!(prompt, "- {commit}");
        }
        prompt.push('\n');
    }

    if !request.diff_stat.is_empty() {
        let _ = write!(
            prompt,
            "## Diff Statistics\n\n```\n{}\n```\n\n",
            request.diff_stat
        );
    }

    if let Some(diff) = request.full_diff.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(prompt, "## Full Diff\n\n```diff\n{diff}\n```\n");
    }

    prompt
}
