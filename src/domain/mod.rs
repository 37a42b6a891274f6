//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::{BumpKind, BumpPolicy};
pub use prerelease::{PreRelease, PreReleaseToken};
pub use version::{Version, VersionBump};
