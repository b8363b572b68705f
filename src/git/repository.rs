use crate::domain::RepositoryTag;
use crate::error::{Result, ScannerError};
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository rooted at `path`
    ///
    /// Parent directories are not searched, so `path` must be the working
    /// copy (or bare repository) itself.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScannerError::repository_not_found(path));
        }

        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<RepositoryTag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            match reference.peel_to_commit() {
                Ok(commit) => tags.push(RepositoryTag::new(name, commit.id())),
                Err(e) => debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        Ok(tags)
    }

    fn read_file(&self, commit: Oid, path: &str) -> Result<Option<String>> {
        let tree = self.repo.find_commit(commit)?.tree()?;

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if entry.kind() != Some(ObjectType::Blob) {
            return Ok(None);
        }

        let blob = self.repo.find_blob(entry.id())?;
        Ok(Some(String::from_utf8_lossy(blob.content()).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    fn commit_file(repo: &Git2Repo, path: &str, content: &str) -> Oid {
        let blob = repo.blob(content.as_bytes()).unwrap();
        let mut builder = git2::build::TreeUpdateBuilder::new();
        builder.upsert(path, blob, git2::FileMode::Blob);

        let empty_tree = repo.treebuilder(None).unwrap().write().unwrap();
        let base = repo.find_tree(empty_tree).unwrap();
        let tree_id = builder.create_updated(repo, &base).unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        repo.commit(None, &sig, &sig, "add file", &tree, &[])
            .unwrap()
    }

    #[test]
    fn test_open_missing_path() {
        let result = Git2Repository::open("/definitely/not/a/repository");
        assert!(matches!(result, Err(ScannerError::RepositoryNotFound(_))));
    }

    #[test]
    fn test_open_plain_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Git2Repository::open(dir.path()),
            Err(ScannerError::Git(_))
        ));
    }

    #[test]
    fn test_read_file_present_and_absent() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let commit = commit_file(&repo, "runtime/oat.h", "kOatVersion");
        let repo = Git2Repository::from_git2(repo);

        assert_eq!(
            repo.read_file(commit, "runtime/oat.h").unwrap().as_deref(),
            Some("kOatVersion")
        );
        assert_eq!(repo.read_file(commit, "runtime/oat/oat.h").unwrap(), None);
        // directories are not files
        assert_eq!(repo.read_file(commit, "runtime").unwrap(), None);
    }

    #[test]
    fn test_list_tags_peels_annotated_and_lightweight() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let commit = commit_file(&repo, "runtime/oat.h", "x");
        {
            let object = repo.find_object(commit, None).unwrap();
            let sig = git2::Signature::now("Test User", "test@example.com").unwrap();

            repo.tag("android-10.0.0_r1", &object, &sig, "release", false)
                .unwrap();
            repo.tag_lightweight("android-9.0.0_r1", &object, false)
                .unwrap();
        }

        let repo = Git2Repository::from_git2(repo);
        let tags = repo.list_tags().unwrap();

        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.commit == commit));
    }
}
