//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations the scanner needs, allowing for a real `git2`-backed
//! implementation and an in-memory mock for testing.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Scanning code depends on the [Repository] trait only.
//!
//! ```rust
//! # use android_git_scanner::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! for tag in repo.list_tags()? {
//!     if let Some(header) = repo.read_file(tag.commit, "runtime/oat.h")? {
//!         println!("{}: {} bytes", tag.name, header.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::RepositoryTag;
use crate::error::Result;
use git2::Oid;

/// Read-only view of a repository's tags and historical file contents
///
/// ## Error Handling
///
/// Methods return [crate::error::Result<T>]. A path that does not exist at a
/// commit is not an error: [Repository::read_file] returns `Ok(None)`.
/// Errors are reserved for a broken object store or missing commits.
pub trait Repository {
    /// Get all tags peeled to their commits
    ///
    /// Returns tags in the backend's enumeration order. Tags that do not
    /// point (directly or through an annotated tag object) at a commit are
    /// left out.
    fn list_tags(&self) -> Result<Vec<RepositoryTag>>;

    /// Read a file from the tree of a commit
    ///
    /// # Arguments
    /// * `commit` - Commit whose tree is searched
    /// * `path` - Slash-separated path relative to the repository root
    ///
    /// # Returns
    /// * `Ok(Some(String))` - File content, lossily decoded as UTF-8
    /// * `Ok(None)` - If the path does not exist or is not a regular file
    /// * `Err` - If the commit cannot be read
    fn read_file(&self, commit: Oid, path: &str) -> Result<Option<String>>;
}
