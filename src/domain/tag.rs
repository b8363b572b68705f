use git2::Oid;
use regex::Regex;

use crate::error::Result;

/// Matches `android-<release>_<revision>` anywhere in a tag name.
const ANDROID_TAG_PATTERN: &str = r"android-(\d+\.\d+(?:\.\d+)?)_(r.*)";

/// A tag as enumerated from the repository, already peeled to its commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTag {
    pub name: String,
    pub commit: Oid,
}

impl RepositoryTag {
    /// Create a new tag pointing at `commit`
    pub fn new(name: impl Into<String>, commit: Oid) -> Self {
        RepositoryTag {
            name: name.into(),
            commit,
        }
    }
}

/// Release identifier and revision parsed from a tag name
/// (e.g. "android-10.0.0_r1" -> "10.0.0", "r1")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTagVersion {
    pub release: String,
    pub revision: String,
}

/// Parses release identifiers out of Android platform tag names.
#[derive(Debug, Clone)]
pub struct TagParser {
    pattern: Regex,
}

impl TagParser {
    pub fn new() -> Result<Self> {
        Ok(TagParser {
            pattern: Regex::new(ANDROID_TAG_PATTERN)?,
        })
    }

    /// Returns `None` for tags that are not Android platform releases.
    pub fn parse(&self, tag_name: &str) -> Option<ParsedTagVersion> {
        let captures = self.pattern.captures(tag_name)?;

        Some(ParsedTagVersion {
            release: captures.get(1)?.as_str().to_string(),
            revision: captures.get(2)?.as_str().to_string(),
        })
    }
}

/// Drops tags whose name contains any of the ignored words.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    ignored_words: Vec<String>,
}

impl TagFilter {
    pub fn new(ignored_words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        TagFilter {
            ignored_words: ignored_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a tag name contains any ignored word
    pub fn is_excluded(&self, tag_name: &str) -> bool {
        self.ignored_words
            .iter()
            .any(|word| tag_name.contains(word.as_str()))
    }

    /// Keeps the input order, removing excluded tags.
    pub fn apply(&self, tags: Vec<RepositoryTag>) -> Vec<RepositoryTag> {
        tags.into_iter()
            .filter(|tag| !self.is_excluded(&tag.name))
            .collect()
    }
}
