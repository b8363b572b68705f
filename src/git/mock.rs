use crate::domain::RepositoryTag;
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<RepositoryTag>,
    files: HashMap<(Oid, String), String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            files: HashMap::new(),
        }
    }

    /// Add a tag pointing to a commit; tags are listed in insertion order
    pub fn add_tag(&mut self, name: impl Into<String>, commit: Oid) {
        self.tags.push(RepositoryTag::new(name, commit));
    }

    /// Add a file to the tree of a commit
    pub fn add_file(&mut self, commit: Oid, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert((commit, path.into()), content.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<RepositoryTag>> {
        Ok(self.tags.clone())
    }

    fn read_file(&self, commit: Oid, path: &str) -> Result<Option<String>> {
        Ok(self.files.get(&(commit, path.to_string())).cloned())
    }
}
