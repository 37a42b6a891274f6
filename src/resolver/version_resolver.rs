use crate::domain::{BumpKind, BumpPolicy, PreRelease, PreReleaseToken, Version};
use crate::error::{NextVersionError, Result};
use crate::resolver::series::{latest_in_series, latest_overall};

/// Outcome of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Next release tag, always `v`-prefixed
    pub next_tag: String,
    pub is_prerelease: bool,
}

impl ResolutionResult {
    fn from_version(version: &Version) -> Self {
        ResolutionResult {
            next_tag: version.to_tag(),
            is_prerelease: version.is_prerelease(),
        }
    }
}

/// Computes the next release tag from a tag snapshot and a bump request
#[derive(Debug, Clone)]
pub struct VersionResolver {
    bootstrap: Version,
}

impl Default for VersionResolver {
    fn default() -> Self {
        VersionResolver {
            bootstrap: Version::new(0, 2, 0),
        }
    }
}

impl VersionResolver {
    /// Create a resolver whose first-ever alpha starts at `bootstrap`
    pub fn new(bootstrap: Version) -> Self {
        VersionResolver {
            bootstrap: bootstrap.finalize(),
        }
    }

    /// Resolve the next version for `bump` given every existing release tag
    ///
    /// # Returns
    /// * `Ok(ResolutionResult)` - The next tag and its prerelease flag
    /// * `Err(Bootstrap)` - No tag parses and `bump` is not `alpha`
    /// * `Err(Promotion)` - `promote_to_final` while the latest is already final
    /// * `Err(Overflow)` - The next component or series number would exceed `u64`
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S], bump: BumpKind) -> Result<ResolutionResult> {
        let next = match latest_overall(tags) {
            None => self.resolve_bootstrap(bump)?,
            Some(latest) => {
                tracing::debug!(latest = %latest, %bump, "resolving from latest tag");
                Self::resolve_established(tags, &latest, bump)?
            }
        };

        tracing::info!(next = %next, %bump, "resolved next version");
        Ok(ResolutionResult::from_version(&next))
    }

    fn resolve_bootstrap(&self, bump: BumpKind) -> Result<Version> {
        match bump {
            BumpKind::Alpha => self
                .bootstrap
                .with_prerelease(&PreRelease::first(PreReleaseToken::Alpha)),
            other => Err(NextVersionError::bootstrap(format!(
                "initial bump must be 'alpha' to start with {}, got '{}'",
                self.bootstrap
                    .with_prerelease(&PreRelease::first(PreReleaseToken::Alpha))?
                    .to_tag(),
                other
            ))),
        }
    }

    fn resolve_established<S: AsRef<str>>(
        tags: &[S],
        latest: &Version,
        bump: BumpKind,
    ) -> Result<Version> {
        match bump.policy() {
            BumpPolicy::Prerelease(token) => {
                let base = latest.finalize();
                let entry = match latest_in_series(tags, &base, token)? {
                    Some(current) => match current.series()? {
                        Some(entry) => entry.increment()?,
                        None => PreRelease::first(token),
                    },
                    None => PreRelease::first(token),
                };
                base.with_prerelease(&entry)
            }
            BumpPolicy::Promote => {
                if !latest.is_prerelease() {
                    return Err(NextVersionError::promotion(format!(
                        "version {} is already final",
                        latest
                    )));
                }
                Ok(latest.finalize())
            }
            BumpPolicy::Final(component) => latest.finalize().bump(&component),
        }
    }
}

/// Resolve with the default bootstrap version (0.2.0)
pub fn resolve<S: AsRef<str>>(tags: &[S], bump: BumpKind) -> Result<ResolutionResult> {
    VersionResolver::default().resolve(tags, bump)
}
