use crate::domain::prerelease::PreRelease;
use crate::error::{NextVersionError, Result};
use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;

/// Semantic version representation
///
/// Build metadata is dropped on parse, so ordering and equality only see
/// `major.minor.patch[-prerelease]`. Field order drives the derived ordering:
/// `semver::Prerelease` sorts an empty prerelease above any non-empty one, so a
/// final version always outranks its own prereleases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Prerelease,
}

impl Version {
    /// Create a new final version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
        }
    }

    /// Parse a version from a release tag (e.g., "v1.2.3-rc.1" -> 1.2.3-rc.1)
    ///
    /// A single leading `v` is stripped; the remainder must be strict semver.
    pub fn parse_tag(tag: &str) -> Result<Self> {
        let raw = tag.strip_prefix('v').unwrap_or(tag);
        Self::parse(raw).map_err(|e| {
            NextVersionError::version(format!("tag '{}' is not a semantic version: {}", tag, e))
        })
    }

    /// Parse a bare semver string (no `v` prefix)
    pub fn parse(raw: &str) -> Result<Self> {
        let parsed = semver::Version::parse(raw)
            .map_err(|e| NextVersionError::version(format!("'{}': {}", raw, e)))?;

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre: parsed.pre,
        })
    }

    /// Semver precedence between two versions
    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Drop the prerelease, keeping major.minor.patch
    pub fn finalize(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Whether both versions share the same major.minor.patch
    pub fn same_base(&self, other: &Version) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
    }

    /// Interpret the prerelease as a `token.number` series entry
    ///
    /// Returns `Ok(None)` for final versions and an error when the prerelease
    /// does not have that two-identifier shape.
    pub fn series(&self) -> Result<Option<PreRelease>> {
        if self.pre.is_empty() {
            return Ok(None);
        }
        PreRelease::parse(self.pre.as_str()).map(Some)
    }

    /// Same major.minor.patch with the given prerelease attached
    pub fn with_prerelease(&self, pre: &PreRelease) -> Result<Self> {
        let pre = Prerelease::new(&pre.to_string()).map_err(|e| {
            NextVersionError::version(format!("invalid prerelease '{}': {}", pre, e))
        })?;

        Ok(Version {
            pre,
            ..self.finalize()
        })
    }

    /// Bump version according to bump type
    ///
    /// Always operates on the finalized form. A component already at
    /// `u64::MAX` cannot be bumped and yields an overflow error.
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let overflow = || {
            NextVersionError::overflow(format!(
                "version {} cannot be bumped: component overflow",
                self
            ))
        };

        let bumped = match bump_type {
            VersionBump::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => {
                Version::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            VersionBump::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(bumped)
    }

    /// Render as a release tag, always with exactly one leading `v`
    pub fn to_tag(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

/// Component bump for final releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(tag: &str) -> Version {
        Version::parse_tag(tag).unwrap()
    }

    #[test]
    fn test_version_parse_tag() {
        let parsed = v("v1.2.3");
        assert_eq!(parsed, Version::new(1, 2, 3));
        assert!(!parsed.is_prerelease());
    }

    #[test]
    fn test_version_parse_tag_with_prerelease() {
        let parsed = v("v0.5.0-alpha.2");
        assert_eq!((parsed.major, parsed.minor, parsed.patch), (0, 5, 0));
        assert_eq!(parsed.pre.as_str(), "alpha.2");
        assert!(parsed.is_prerelease());
    }

    #[test]
    fn test_version_parse_tag_drops_build_metadata() {
        assert_eq!(v("v1.2.3+build.7"), Version::new(1, 2, 3));
        assert_eq!(v("v1.2.3-rc.1+sha.abc"), v("v1.2.3-rc.1"));
    }

    #[test]
    fn test_version_parse_tag_invalid() {
        assert!(Version::parse_tag("v1.2").is_err());
        assert!(Version::parse_tag("v1.2.3.4").is_err());
        assert!(Version::parse_tag("release-1.2.3").is_err());
        assert!(Version::parse_tag("v01.2.3").is_err());
        assert!(Version::parse_tag("vlatest").is_err());
    }

    #[test]
    fn test_prerelease_orders_below_final() {
        assert_eq!(v("v2.0.0-rc.1").compare(&v("v2.0.0")), Ordering::Less);
        assert_eq!(v("v2.0.0").compare(&v("v2.0.0-rc.9")), Ordering::Greater);
        assert!(v("v1.9.9") < v("v2.0.0-alpha.1"));
    }

    #[test]
    fn test_numeric_ordering_within_token() {
        assert!(v("v1.0.0-alpha.2") < v("v1.0.0-alpha.10"));
        assert_eq!(
            v("v1.0.0-beta.3").compare(&v("v1.0.0-beta.3")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_core_ordering_is_numeric() {
        assert!(v("v1.10.0") > v("v1.9.0"));
        assert!(v("v10.0.0") > v("v9.99.99"));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        for tag in ["v1.2.3", "v1.2.3-alpha.1", "v0.0.1-rc.4", "v3.0.0-beta"] {
            let once = v(tag).finalize();
            assert_eq!(once.finalize(), once);
            assert!(!once.is_prerelease());
        }
    }

    #[test]
    fn test_series_shape() {
        assert_eq!(v("v1.0.0").series().unwrap(), None);

        let pre = v("v1.0.0-beta.4").series().unwrap().unwrap();
        assert_eq!(pre.token, "beta");
        assert_eq!(pre.number, 4);

        assert!(v("v1.0.0-beta").series().is_err());
        assert!(v("v1.0.0-beta.x").series().is_err());
    }

    #[test]
    fn test_with_prerelease() {
        let base = v("v0.5.0-alpha.3");
        let next = base.with_prerelease(&PreRelease::new("beta", 1)).unwrap();
        assert_eq!(next.to_string(), "0.5.0-beta.1");
    }

    #[test]
    fn test_version_bump_ignores_prerelease() {
        let current = v("v1.2.0-alpha.1");
        assert_eq!(
            current.bump(&VersionBump::Patch).unwrap(),
            Version::new(1, 2, 1)
        );
        assert_eq!(
            current.bump(&VersionBump::Minor).unwrap(),
            Version::new(1, 3, 0)
        );
        assert_eq!(
            current.bump(&VersionBump::Major).unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_version_bump_overflow() {
        let max = u64::MAX;
        let cases = [
            (Version::new(max, 0, 0), VersionBump::Major),
            (Version::new(1, max, 0), VersionBump::Minor),
            (Version::new(1, 2, max), VersionBump::Patch),
        ];

        for (version, bump) in cases {
            let err = version.bump(&bump).unwrap_err();
            assert!(matches!(err, NextVersionError::Overflow(_)));
            assert!(err.to_string().contains("component overflow"));
        }

        // Lower components reset, so only the bumped one matters
        assert_eq!(
            Version::new(1, max, max).bump(&VersionBump::Major).unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_to_tag_has_single_prefix() {
        assert_eq!(Version::new(1, 3, 0).to_tag(), "v1.3.0");
        assert_eq!(v("v1.3.0-beta.2").to_tag(), "v1.3.0-beta.2");
    }
}
