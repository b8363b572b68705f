use git2::Oid;

use crate::analyzer::VersionExtractor;
use crate::error::Result;
use crate::git::Repository;

/// A source file found at a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    pub path: String,
    pub content: String,
}

/// Result of looking for a version constant at one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Found { version: String, path: String },
    /// None of the header candidates exist
    FileMissing,
    /// A header exists but neither it nor the fallback yielded a version.
    /// `path` is the last file that was inspected.
    NoVersion { path: String },
}

/// Where a version constant has lived across history.
///
/// `headers` are tried in order and the first one present is used. The
/// `fallback` source is only consulted when that header yields no version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub headers: Vec<&'static str>,
    pub fallback: Option<&'static str>,
}

impl SourceLayout {
    /// `runtime/oat/oat.h` (newer), `runtime/oat.h` (older), with `runtime/oat.cc` as fallback
    pub fn oat() -> Self {
        SourceLayout {
            headers: vec!["runtime/oat/oat.h", "runtime/oat.h"],
            fallback: Some("runtime/oat.cc"),
        }
    }

    pub fn vdex() -> Self {
        SourceLayout {
            headers: vec!["runtime/vdex_file.h"],
            fallback: None,
        }
    }
}

/// Returns the first candidate path present in the commit tree.
pub fn locate<R: Repository>(
    repo: &R,
    commit: Oid,
    candidates: &[&str],
) -> Result<Option<LocatedFile>> {
    for path in candidates {
        if let Some(content) = repo.read_file(commit, path)? {
            return Ok(Some(LocatedFile {
                path: path.to_string(),
                content,
            }));
        }
    }

    Ok(None)
}

/// Locates the header for `layout`, extracts from it, and falls back to the
/// layout's fallback source only if the header produced no version.
pub fn probe<R: Repository>(
    repo: &R,
    commit: Oid,
    layout: &SourceLayout,
    extractor: &VersionExtractor,
) -> Result<Probe> {
    let Some(header) = locate(repo, commit, &layout.headers)? else {
        return Ok(Probe::FileMissing);
    };

    if let Some(version) = extractor.extract(&header.content) {
        return Ok(Probe::Found {
            version,
            path: header.path,
        });
    }

    let fallback = match layout.fallback {
        Some(path) => locate(repo, commit, &[path])?,
        None => None,
    };

    match fallback {
        Some(file) => match extractor.extract(&file.content) {
            Some(version) => Ok(Probe::Found {
                version,
                path: file.path,
            }),
            None => Ok(Probe::NoVersion { path: file.path }),
        },
        None => Ok(Probe::NoVersion { path: header.path }),
    }
}
