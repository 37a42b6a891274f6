//! Resolution engine for determining the next release tag

pub mod series;
pub mod version_resolver;

pub use series::{latest_in_series, latest_overall};
pub use version_resolver::{resolve, ResolutionResult, VersionResolver};
