mod changelog_generator;
mod changelog_writer;
mod git_provider;

pub use changelog_generator::{ChangelogGenerator, TextChunks};
pub use changelog_writer::{ChangelogWriteResult, ChangelogWriter};
pub use git_provider::GitProvider;
