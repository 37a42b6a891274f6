//! Pre-release series handling
//!
//! Release tags in a prerelease series always carry exactly two identifiers:
//! a token (alpha, beta, rc) and an increasing number, e.g. `1.4.0-beta.2`.
//! See https://semver.org/#spec-item-9 for the underlying identifier rules.

use crate::error::{NextVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release stage that a bump request can open or continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreReleaseToken {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreReleaseToken {
    /// The identifier written into tags for this stage
    pub fn as_str(&self) -> &'static str {
        match self {
            PreReleaseToken::Alpha => "alpha",
            PreReleaseToken::Beta => "beta",
            PreReleaseToken::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for PreReleaseToken {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseToken::Alpha),
            "beta" => Ok(PreReleaseToken::Beta),
            "rc" => Ok(PreReleaseToken::ReleaseCandidate),
            other => Err(NextVersionError::version(format!(
                "Unknown pre-release token: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a prerelease series, e.g. "beta.2"
///
/// The token is kept as a plain string so tags from other series (say
/// `dev.3`) still parse; they simply never match a requested token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub token: String,
    pub number: u64,
}

impl PreRelease {
    pub fn new(token: impl Into<String>, number: u64) -> Self {
        PreRelease {
            token: token.into(),
            number,
        }
    }

    /// First entry of a new series for the given stage
    pub fn first(token: PreReleaseToken) -> Self {
        PreRelease::new(token.as_str(), 1)
    }

    /// Parse a `token.number` prerelease string
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Exactly two identifiers with a numeric second one
    /// * `Err` - Any other shape ("alpha", "alpha.1.2", "alpha.x", ...)
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return Err(NextVersionError::version(format!(
                "Expected '<token>.<number>' pre-release, got '{}'",
                s
            )));
        }

        let digits = parts[1];
        let number = digits.parse::<u64>().map_err(|_| {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                // Numeric, just too large to continue
                NextVersionError::overflow(format!(
                    "pre-release number in '{}' exceeds {}",
                    s,
                    u64::MAX
                ))
            } else {
                NextVersionError::version(format!("Invalid pre-release number: '{}'", digits))
            }
        })?;

        Ok(PreRelease::new(parts[0], number))
    }

    /// Whether this entry belongs to the series of the given stage
    pub fn is_token(&self, token: PreReleaseToken) -> bool {
        self.token == token.as_str()
    }

    /// Next entry in the same series
    pub fn increment(&self) -> Result<Self> {
        let number = self.number.checked_add(1).ok_or_else(|| {
            NextVersionError::overflow(format!(
                "pre-release {} cannot be bumped: component overflow",
                self
            ))
        })?;

        Ok(PreRelease {
            token: self.token.clone(),
            number,
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.token, self.number)
    }
}
