mod error;
mod logging;
mod release;

use std::path::PathBuf;
use std::process::ExitCode;

use chronicle_ai::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use chronicle_operations::diff_strategy::DEFAULT_MAX_DIFF_LINES;
use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "chronicle")]
#[command(about = "Generate Keep a Changelog entries from git history with Claude", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to the git repository
    #[arg(long = "repo", short = 'r', default_value = ".")]
    repo: PathBuf,

    /// Model used to write the changelog
    #[arg(long = "model", short = 'm', default_value = DEFAULT_MODEL)]
    model: String,

    /// Preview: file to write the entry to (default: stdout).
    /// Release: changelog to update (default: <repo>/CHANGELOG.md)
    #[arg(long = "output", short = 'o', value_parser = OsStringValueParser::new().map(PathBuf::from))]
    output: Option<PathBuf>,

    /// Version to release, e.g. v1.2.0. Without it the entry is only previewed
    #[arg(long = "version", short = 'v')]
    version: Option<String>,

    /// Send the full diff only when at most this many lines changed
    #[arg(long = "max-diff", default_value_t = DEFAULT_MAX_DIFF_LINES)]
    max_diff: usize,

    /// Anthropic API key
    #[arg(long = "api-key", env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Anthropic API endpoint
    #[arg(long = "base-url", env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Upper bound on the length of the generated entry, in tokens
    #[arg(long = "max-tokens", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Only log warnings and errors
    #[arg(long = "quiet", short = 'q')]
    quiet: bool,

    /// Print the chronicle version and exit
    #[arg(long = "tool-version")]
    tool_version: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.tool_version {
        println!("chronicle {}", env!("CHRONICLE_VERSION"));
        return ExitCode::SUCCESS;
    }

    logging::init(cli.quiet);

    match release::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
