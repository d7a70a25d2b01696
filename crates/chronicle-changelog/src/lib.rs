mod changelog;
mod entry;
mod error;
mod format;

pub use changelog::{Changelog, merge};
pub use entry::{ChangeCategory, ChangelogEntry};
pub use error::ChangelogError;
pub use format::{CHANGELOG_HEADER, UNRELEASED_HEADER, format_version_header};

pub type Result<T> = std::result::Result<T, ChangelogError>;
