//! Domain logic - tags, release ordering and per-tag outcomes, independent of git operations

pub mod outcome;
pub mod release;
pub mod tag;

pub use outcome::{ScanSummary, SkipReason, TagOutcome};
pub use release::{compare_releases, ReleaseVersion};
pub use tag::{ParsedTagVersion, RepositoryTag, TagFilter, TagParser};
