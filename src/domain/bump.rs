use crate::domain::prerelease::PreReleaseToken;
use crate::domain::version::VersionBump;
use crate::error::{NextVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// The kind of release a caller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Alpha,
    Beta,
    Rc,
    PromoteToFinal,
    Patch,
    Minor,
    Major,
}

/// What a bump kind does to the current latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpPolicy {
    /// Open or continue the series for this token
    Prerelease(PreReleaseToken),
    /// Drop the prerelease of the current latest
    Promote,
    /// Bump a component of the finalized latest
    Final(VersionBump),
}

impl BumpKind {
    pub const ALL: [BumpKind; 7] = [
        BumpKind::Alpha,
        BumpKind::Beta,
        BumpKind::Rc,
        BumpKind::PromoteToFinal,
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Major,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Alpha => "alpha",
            BumpKind::Beta => "beta",
            BumpKind::Rc => "rc",
            BumpKind::PromoteToFinal => "promote_to_final",
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        }
    }

    pub fn policy(&self) -> BumpPolicy {
        match self {
            BumpKind::Alpha => BumpPolicy::Prerelease(PreReleaseToken::Alpha),
            BumpKind::Beta => BumpPolicy::Prerelease(PreReleaseToken::Beta),
            BumpKind::Rc => BumpPolicy::Prerelease(PreReleaseToken::ReleaseCandidate),
            BumpKind::PromoteToFinal => BumpPolicy::Promote,
            BumpKind::Patch => BumpPolicy::Final(VersionBump::Patch),
            BumpKind::Minor => BumpPolicy::Final(VersionBump::Minor),
            BumpKind::Major => BumpPolicy::Final(VersionBump::Major),
        }
    }

    /// Parse an optional selector, treating absence as a configuration error
    pub fn from_selector(selector: Option<&str>) -> Result<Self> {
        match selector.map(str::trim) {
            None | Some("") => Err(NextVersionError::config(
                "BUMP_TYPE environment variable not set",
            )),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for BumpKind {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        BumpKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NextVersionError::config(format!("Unknown BUMP_TYPE '{}'", s)))
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        for kind in BumpKind::ALL {
            assert_eq!(kind.as_str().parse::<BumpKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "hotfix".parse::<BumpKind>().unwrap_err();
        assert!(matches!(err, NextVersionError::Config(_)));
        assert!(err.to_string().contains("hotfix"));
    }

    #[test]
    fn test_from_selector_missing() {
        assert!(matches!(
            BumpKind::from_selector(None),
            Err(NextVersionError::Config(_))
        ));
        assert!(BumpKind::from_selector(Some("  ")).is_err());
        assert_eq!(
            BumpKind::from_selector(Some(" rc\n")).unwrap(),
            BumpKind::Rc
        );
    }

    #[test]
    fn test_policy() {
        assert_eq!(
            BumpKind::Beta.policy(),
            BumpPolicy::Prerelease(PreReleaseToken::Beta)
        );
        assert_eq!(BumpKind::PromoteToFinal.policy(), BumpPolicy::Promote);
        assert_eq!(
            BumpKind::Minor.policy(),
            BumpPolicy::Final(VersionBump::Minor)
        );
    }
}
