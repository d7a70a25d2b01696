use std::fmt;

use thiserror::Error;

/// One of the three numeric parts of a release version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("version '{version}' must be in vMAJOR.MINOR.PATCH format (e.g. v1.2.0)")]
    InvalidFormat { version: String },

    #[error("version '{version}': invalid {component} component")]
    InvalidComponent {
        version: String,
        component: Component,
    },

    #[error("last tag '{tag}' is not valid semver; cannot compare versions")]
    IncomparableLastTag {
        tag: String,
        #[source]
        source: Box<VersionError>,
    },

    #[error("version {version} must be greater than the last release tag {last}")]
    NotGreater { version: String, last: String },
}
