use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chronicle_ai::AnthropicClient;
use chronicle_operations::operations::{ReleaseInput, ReleaseOperation, ReleaseOutcome};
use chronicle_operations::providers::{AnthropicGenerator, FileSystemChangelogWriter, Git2Provider};
use chrono::Local;
use tracing::{debug, info};

use crate::Cli;
use crate::error::{CliError, Result};

const CHANGELOG_FILE: &str = "CHANGELOG.md";
const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

pub(crate) fn run(cli: Cli) -> Result<()> {
    let api_key = resolve_api_key(cli.api_key, std::env::var(API_KEY_ENV).ok())?;
    let version = non_empty(cli.version);
    let output = cli.output.filter(|path| !path.as_os_str().is_empty());

    let repo_path =
        std::fs::canonicalize(&cli.repo).map_err(|source| CliError::RepoNotAccessible {
            path: cli.repo.clone(),
            source,
        })?;

    let client = AnthropicClient::new(api_key, cli.model)?
        .with_base_url(cli.base_url)
        .with_max_tokens(cli.max_tokens);
    debug!(model = client.model(), "configured Anthropic client");

    let operation = ReleaseOperation::new(
        Git2Provider::new(),
        AnthropicGenerator::new(client),
        FileSystemChangelogWriter::new(),
    );

    let changelog_path = match &output {
        Some(path) => std::path::absolute(path).map_err(CliError::OutputPath)?,
        None => repo_path.join(CHANGELOG_FILE),
    };

    let input = ReleaseInput {
        repo_path,
        version,
        max_diff_lines: cli.max_diff,
        changelog_path,
        date: Local::now().date_naive(),
    };

    let outcome = operation.execute(&input, || open_preview(output.as_deref()))?;

    report(&outcome);

    Ok(())
}

/// An empty `--api-key` falls back to the environment like an absent one.
fn resolve_api_key(flag: Option<String>, env: Option<String>) -> Result<String> {
    non_empty(flag)
        .or_else(|| non_empty(env))
        .ok_or(CliError::MissingApiKey)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn open_preview(output: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create '{}': {e}", path.display()))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn report(outcome: &ReleaseOutcome) {
    match outcome {
        ReleaseOutcome::Preview(preview) => {
            debug!(
                strategy = %preview.strategy,
                changed_lines = preview.changed_lines,
                "preview complete"
            );
        }
        ReleaseOutcome::Released(release) => {
            info!(
                version = %release.version,
                commit = %release.commit.sha,
                "released {}",
                release.tag.name
            );
            info!("next: git push && git push --tags");
        }
    }
}
