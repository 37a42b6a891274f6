use crate::error::Result;
use crate::git::TagSource;

/// Fixed list of tag names, no repository involved
#[derive(Debug, Clone, Default)]
pub struct StaticTags {
    tags: Vec<String>,
}

impl StaticTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticTags {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl TagSource for StaticTags {
    fn list_release_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_tags_list() {
        let source = StaticTags::new(["v1.0.0", "v2.0.0-rc.1"]);

        let tags = source.list_release_tags().unwrap();
        assert_eq!(tags, vec!["v1.0.0".to_string(), "v2.0.0-rc.1".to_string()]);
    }

    #[test]
    fn test_static_tags_default() {
        assert!(StaticTags::default().list_release_tags().unwrap().is_empty());
    }
}
