use crate::error::Result;
use crate::git::{TagSource, DEFAULT_TAG_PATTERN};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Tag source backed by a git repository on disk
pub struct Git2Repository {
    repo: Git2Repo,
    pattern: String,
}

impl Git2Repository {
    /// Open or discover a git repository, listing tags that match `v*`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            pattern: DEFAULT_TAG_PATTERN.to_string(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            pattern: DEFAULT_TAG_PATTERN.to_string(),
        }
    }

    /// Use a different glob for release tags
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

impl TagSource for Git2Repository {
    fn list_release_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(Some(&self.pattern))?;
        let names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();

        tracing::debug!(count = names.len(), pattern = %self.pattern, "listed release tags");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit_and_tag(repo: &Git2Repo, tags: &[&str]) {
        let sig = git2::Signature::now("Release Bot", "bot@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let object = repo.find_object(oid, None).unwrap();
        for tag in tags {
            repo.tag_lightweight(tag, &object, false).unwrap();
        }
    }

    #[test]
    fn test_list_release_tags_filters_pattern() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v1.0.0", "v1.1.0-beta.1", "release-2"]);

        let source = Git2Repository::from_git2(repo);
        let mut tags = source.list_release_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["v1.0.0".to_string(), "v1.1.0-beta.1".to_string()]);
    }

    #[test]
    fn test_list_release_tags_custom_pattern() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v1.0.0", "release-2"]);

        let source = Git2Repository::from_git2(repo).with_pattern("release-*");
        assert_eq!(
            source.list_release_tags().unwrap(),
            vec!["release-2".to_string()]
        );
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        // discover walks upward; a fresh temp dir normally has no repo above it
        if Git2Repo::discover(dir.path()).is_err() {
            assert!(Git2Repository::open(dir.path()).is_err());
        }
    }
}
