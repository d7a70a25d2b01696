mod error;

use std::fmt;
use std::str::FromStr;

pub use error::{Component, VersionError};

pub type Result<T> = std::result::Result<T, VersionError>;

/// A `MAJOR.MINOR.PATCH` release version, optionally written with a leading `v`.
///
/// Pre-release and build metadata are rejected, so ordering is plain
/// lexicographic order over the three components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion(semver::Version);

impl ReleaseVersion {
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// # Errors
    ///
    /// Returns [`VersionError::InvalidFormat`] if the text does not have exactly three
    /// dot-separated segments, or [`VersionError::InvalidComponent`] naming the first
    /// segment that is not a non-negative integer.
    pub fn parse(text: &str) -> Result<Self> {
        let stripped = text.strip_prefix('v').unwrap_or(text);
        let segments: Vec<&str> = stripped.split('.').collect();

        let [major, minor, patch] = segments.as_slice() else {
            return Err(VersionError::InvalidFormat {
                version: text.to_string(),
            });
        };

        Ok(Self::new(
            parse_component(text, major, Component::Major)?,
            parse_component(text, minor, Component::Minor)?,
            parse_component(text, patch, Component::Patch)?,
        ))
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_component(version: &str, segment: &str, component: Component) -> Result<u64> {
    let invalid = || VersionError::InvalidComponent {
        version: version.to_string(),
        component,
    };

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    segment.parse().map_err(|_| invalid())
}

/// Checks that `new_version` may be released after `last_tag`.
///
/// Any valid version is accepted for a first release. Otherwise the new version
/// must be strictly greater than the last tag, and a last tag that does not parse
/// rejects every new version.
///
/// # Errors
///
/// Returns a parse error for an invalid `new_version`,
/// [`VersionError::IncomparableLastTag`] if `last_tag` is not a release version, and
/// [`VersionError::NotGreater`] if `new_version` does not come after it.
pub fn validate_new_version(new_version: &str, last_tag: Option<&str>) -> Result<ReleaseVersion> {
    let new = ReleaseVersion::parse(new_version)?;

    let Some(last_tag) = last_tag else {
        return Ok(new);
    };

    let last = ReleaseVersion::parse(last_tag).map_err(|source| {
        VersionError::IncomparableLastTag {
            tag: last_tag.to_string(),
            source: Box::new(source),
        }
    })?;

    if new <= last {
        return Err(VersionError::NotGreater {
            version: new_version.to_string(),
            last: last_tag.to_string(),
        });
    }

    Ok(new)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn leading_v_is_optional() -> anyhow::Result<()> {
        for (major, minor, patch) in [(0, 0, 0), (1, 2, 3), (10, 0, 42)] {
            let plain = ReleaseVersion::parse(&format!("{major}.{minor}.{patch}"))?;
            let prefixed = ReleaseVersion::parse(&format!("v{major}.{minor}.{patch}"))?;
            assert_eq!(plain, prefixed);
            assert_eq!(plain, ReleaseVersion::new(major, minor, patch));
        }
        Ok(())
    }

    #[test]
    fn only_one_leading_v_is_stripped() {
        assert!(ReleaseVersion::parse("vv1.0.0").is_err());
    }

    #[test]
    fn wrong_segment_count_is_a_format_error() {
        for input in ["1", "1.2", "1.2.3.4", "", "v", "1..2.3"] {
            let result = ReleaseVersion::parse(input);
            assert!(
                matches!(
                    result,
                    Err(VersionError::InvalidFormat { .. } | VersionError::InvalidComponent { .. })
                ),
                "expected '{input}' to be rejected"
            );
        }
        assert!(matches!(
            ReleaseVersion::parse("1.2.3.4"),
            Err(VersionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn invalid_component_is_named() {
        let cases = [
            ("x.2.3", Component::Major),
            ("1.y.3", Component::Minor),
            ("1.2.z", Component::Patch),
            ("1.2.3-rc", Component::Patch),
            ("1.-2.3", Component::Minor),
        ];

        for (input, expected) in cases {
            match ReleaseVersion::parse(input) {
                Err(VersionError::InvalidComponent { component, .. }) => {
                    assert_eq!(component, expected, "wrong component for '{input}'");
                }
                other => panic!("expected invalid component for '{input}', got {other:?}"),
            }
        }
    }

    #[test]
    fn prerelease_and_build_metadata_are_rejected() {
        assert!(ReleaseVersion::parse("1.0.0-alpha.1").is_err());
        assert!(ReleaseVersion::parse("1.0.0+build").is_err());
    }

    #[test]
    fn error_message_names_component() {
        let err = ReleaseVersion::parse("v1.x.0").expect_err("minor is not numeric");
        assert_eq!(err.to_string(), "version 'v1.x.0': invalid minor component");
    }

    #[test]
    fn ordering_is_lexicographic_by_major_minor_patch() -> anyhow::Result<()> {
        let cmp = |a: &str, b: &str| -> anyhow::Result<Ordering> {
            Ok(ReleaseVersion::parse(a)?.cmp(&ReleaseVersion::parse(b)?))
        };

        assert_eq!(cmp("2.0.0", "1.99.99")?, Ordering::Greater);
        assert_eq!(cmp("1.3.0", "1.2.9")?, Ordering::Greater);
        assert_eq!(cmp("1.2.4", "1.2.3")?, Ordering::Greater);
        assert_eq!(cmp("v1.2.3", "1.2.3")?, Ordering::Equal);
        assert_eq!(cmp("0.9.0", "0.10.0")?, Ordering::Less);
        Ok(())
    }

    #[test]
    fn display_omits_prefix() -> anyhow::Result<()> {
        assert_eq!(ReleaseVersion::parse("v3.1.4")?.to_string(), "3.1.4");
        Ok(())
    }

    #[test]
    fn first_release_accepts_any_valid_version() -> anyhow::Result<()> {
        let version = validate_new_version("v0.1.0", None)?;
        assert_eq!(version, ReleaseVersion::new(0, 1, 0));
        Ok(())
    }

    #[test]
    fn first_release_still_rejects_malformed_version() {
        assert!(matches!(
            validate_new_version("1.0", None),
            Err(VersionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn greater_version_is_accepted() -> anyhow::Result<()> {
        validate_new_version("1.2.1", Some("v1.2.0"))?;
        validate_new_version("v2.0.0", Some("1.9.9"))?;
        Ok(())
    }

    #[test]
    fn equal_version_is_rejected() {
        let err = validate_new_version("v1.2.0", Some("1.2.0")).expect_err("equal version");
        assert!(matches!(err, VersionError::NotGreater { .. }));
    }

    #[test]
    fn lesser_version_is_rejected_naming_both() {
        let err = validate_new_version("1.1.0", Some("1.2.0")).expect_err("lesser version");
        let msg = err.to_string();
        assert!(msg.contains("must be greater"));
        assert!(msg.contains("1.1.0"));
        assert!(msg.contains("1.2.0"));
    }

    #[test]
    fn non_semver_last_tag_rejects_every_version() {
        for new in ["0.0.1", "1.0.0", "99.0.0"] {
            let err = validate_new_version(new, Some("release-2024")).expect_err("incomparable");
            assert!(matches!(err, VersionError::IncomparableLastTag { .. }));
            assert!(err.to_string().contains("cannot compare"));
        }
    }

    #[test]
    fn invalid_new_version_is_reported_before_last_tag() {
        let err = validate_new_version("next", Some("release-2024")).expect_err("invalid new");
        assert!(matches!(err, VersionError::InvalidFormat { .. }));
    }
}
