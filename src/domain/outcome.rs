use std::fmt;

/// Why a tag contributed nothing to the table.
/// These are expected, non-fatal conditions of old or unusual tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// None of the candidate source files exist at the tagged commit
    FileMissing,
    /// A source file was found but no version constant could be extracted
    NoVersion { path: String },
    /// Tag name is not an Android platform release
    UnparsableTag,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FileMissing => write!(f, "no candidate source file at this commit"),
            SkipReason::NoVersion { path } => {
                write!(f, "no version constant found in '{}'", path)
            }
            SkipReason::UnparsableTag => write!(f, "tag name is not an android release"),
        }
    }
}

/// Result of processing a single tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    Recorded {
        release: String,
        version: String,
        source_path: String,
    },
    Skipped(SkipReason),
}

/// Counters for one scan pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub tags_seen: usize,
    pub tags_excluded: usize,
    pub recorded: usize,
    pub file_missing: usize,
    pub no_version: usize,
    pub unparsable: usize,
}

impl ScanSummary {
    pub fn count(&mut self, outcome: &TagOutcome) {
        match outcome {
            TagOutcome::Recorded { .. } => self.recorded += 1,
            TagOutcome::Skipped(SkipReason::FileMissing) => self.file_missing += 1,
            TagOutcome::Skipped(SkipReason::NoVersion { .. }) => self.no_version += 1,
            TagOutcome::Skipped(SkipReason::UnparsableTag) => self.unparsable += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.file_missing + self.no_version + self.unparsable
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tags seen, {} excluded, {} recorded, {} skipped",
            self.tags_seen,
            self.tags_excluded,
            self.recorded,
            self.skipped()
        )
    }
}
