mod changelog;
mod generator;
mod git;

pub use changelog::FileSystemChangelogWriter;
pub use generator::AnthropicGenerator;
pub use git::Git2Provider;
