use std::fmt;

/// Reasons a listed tag is left out of version resolution.
/// These are non-fatal; the tag is reported and skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum TagSkip {
    /// Tag is not `v` followed by a strict semantic version
    Unparsable { tag: String, reason: String },
    /// Tag carries the requested token but not as `<token>.<number>`
    UnexpectedPrerelease { tag: String, reason: String },
}

impl TagSkip {
    pub fn tag(&self) -> &str {
        match self {
            TagSkip::Unparsable { tag, .. } | TagSkip::UnexpectedPrerelease { tag, .. } => tag,
        }
    }
}

impl fmt::Display for TagSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSkip::Unparsable { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            TagSkip::UnexpectedPrerelease { tag, reason } => {
                write!(
                    f,
                    "Prerelease part of tag '{}' is not as expected for comparison: {}",
                    tag, reason
                )
            }
        }
    }
}
