//! Scanning a tag snapshot for the overall latest version and for the latest
//! entry of a single prerelease series.
//!
//! Both scans take the full, unsorted tag list every time; nothing is cached
//! between calls.

use crate::boundary::TagSkip;
use crate::domain::{PreReleaseToken, Version};
use crate::error::Result;

/// Parse every tag that is `v` + strict semver, skipping the rest
///
/// Unparsable tags are reported at debug level only; repositories routinely
/// carry unrelated `v*` tags.
pub fn parse_release_tags<S: AsRef<str>>(tags: &[S]) -> impl Iterator<Item = (&str, Version)> {
    tags.iter().filter_map(|tag| {
        let tag = tag.as_ref();
        match Version::parse_tag(tag) {
            Ok(version) => Some((tag, version)),
            Err(e) => {
                let skip = TagSkip::Unparsable {
                    tag: tag.to_string(),
                    reason: e.to_string(),
                };
                tracing::debug!(tag = skip.tag(), "{}", skip);
                None
            }
        }
    })
}

/// Highest version among the parseable tags, or `None` if none parse
pub fn latest_overall<S: AsRef<str>>(tags: &[S]) -> Option<Version> {
    parse_release_tags(tags)
        .map(|(_, version)| version)
        .max_by(|a, b| a.compare(b))
}

/// Latest `base-token.N` tag, compared by `N`
///
/// Only tags whose major.minor.patch equals `base` and whose prerelease is
/// exactly `<token>.<number>` take part. Tags that carry the token in some
/// other shape are skipped with a warning. A series number too large to be
/// continued is an error, since skipping it would restart the series below
/// an existing tag.
pub fn latest_in_series<S: AsRef<str>>(
    tags: &[S],
    base: &Version,
    token: PreReleaseToken,
) -> Result<Option<Version>> {
    let mut latest: Option<(u64, Version)> = None;

    for (tag, version) in parse_release_tags(tags) {
        if !version.same_base(base) || !version.is_prerelease() {
            continue;
        }

        let first = version.pre.as_str().split('.').next().unwrap_or_default();
        if first != token.as_str() {
            continue;
        }

        let entry = match version.series() {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                let skip = TagSkip::UnexpectedPrerelease {
                    tag: tag.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(tag = skip.tag(), "{}", skip);
                continue;
            }
        };

        tracing::debug!(tag, number = entry.number, "series candidate");

        if latest
            .as_ref()
            .map_or(true, |(number, _)| entry.number > *number)
        {
            latest = Some((entry.number, version));
        }
    }

    Ok(latest.map(|(_, version)| version))
}
