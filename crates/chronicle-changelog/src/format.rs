use chrono::NaiveDate;

/// Header block written at the top of a newly created changelog.
pub const CHANGELOG_HEADER: &str = r"# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).
";

/// Section header used when no release version was requested.
pub const UNRELEASED_HEADER: &str = "## [Unreleased]";

/// `## [<version>] - <YYYY-MM-DD>`, with the version exactly as given.
#[must_use]
pub fn format_version_header(version: &str, date: NaiveDate) -> String {
    format!("## [{version}] - {}", date.format("%Y-%m-%d"))
}
