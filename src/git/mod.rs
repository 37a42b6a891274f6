//! Tag enumeration abstraction layer
//!
//! The resolver never talks to git directly. It receives a snapshot of tag
//! names produced by a [TagSource]:
//!
//! - [repository::Git2Repository]: lists tags of a real repository via `git2`
//! - [mock::StaticTags]: a fixed in-memory list, used by tests and `--tag`
//!
//! ```rust
//! # use next_version::git::{StaticTags, TagSource};
//! let source = StaticTags::new(["v1.0.0", "v1.1.0-rc.1"]);
//! let tags = source.list_release_tags().unwrap();
//! assert_eq!(tags.len(), 2);
//! ```

pub mod mock;
pub mod repository;

pub use mock::StaticTags;
pub use repository::Git2Repository;

use crate::error::Result;

/// Default glob for release tags
pub const DEFAULT_TAG_PATTERN: &str = "v*";

/// Source of release tag names
///
/// Order of the returned names carries no meaning; the resolver determines
/// the maximum on its own.
pub trait TagSource {
    /// List every tag name matching the release tag convention
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If the underlying store cannot be read
    fn list_release_tags(&self) -> Result<Vec<String>>;
}
