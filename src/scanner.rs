use tracing::{debug, info};

use crate::aggregate::{Aggregator, Orientation};
use crate::analyzer::{probe, Probe, SourceLayout, VersionExtractor};
use crate::config::Config;
use crate::domain::{RepositoryTag, ScanSummary, SkipReason, TagFilter, TagOutcome, TagParser};
use crate::error::Result;
use crate::git::Repository;
use crate::task::ScanTask;

/// Aggregated mapping plus counters from one scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub aggregator: Aggregator,
    pub summary: ScanSummary,
}

/// Maps release tags of a repository to one kind of version constant
pub struct Scanner<'r, R: Repository> {
    repo: &'r R,
    task: ScanTask,
    filter: TagFilter,
    parser: TagParser,
    layout: SourceLayout,
    extractor: VersionExtractor,
}

impl<'r, R: Repository> Scanner<'r, R> {
    pub fn new(repo: &'r R, task: ScanTask, config: &Config) -> Result<Self> {
        Ok(Scanner {
            repo,
            task,
            filter: TagFilter::new(config.tags.ignored_words.iter().cloned()),
            parser: TagParser::new()?,
            layout: task.layout(),
            extractor: task.extractor()?,
        })
    }

    /// Tags that survive the ignored-word filter, in repository order
    pub fn tags(&self) -> Result<Vec<RepositoryTag>> {
        Ok(self.filter.apply(self.repo.list_tags()?))
    }

    /// Reads the version constant at the tag's commit and pairs it with the
    /// release parsed from the tag name.
    pub fn process_tag(&self, tag: &RepositoryTag) -> Result<TagOutcome> {
        let found = probe(self.repo, tag.commit, &self.layout, &self.extractor)?;
        let (version, source_path) = match found {
            Probe::Found { version, path } => (version, path),
            Probe::FileMissing => return Ok(TagOutcome::Skipped(SkipReason::FileMissing)),
            Probe::NoVersion { path } => {
                return Ok(TagOutcome::Skipped(SkipReason::NoVersion { path }))
            }
        };

        let Some(parsed) = self.parser.parse(&tag.name) else {
            return Ok(TagOutcome::Skipped(SkipReason::UnparsableTag));
        };

        Ok(TagOutcome::Recorded {
            release: parsed.release,
            version,
            source_path,
        })
    }

    pub fn scan(&self, orientation: Orientation) -> Result<ScanReport> {
        let all_tags = self.repo.list_tags()?;
        let mut summary = ScanSummary {
            tags_seen: all_tags.len(),
            ..ScanSummary::default()
        };

        let tags = self.filter.apply(all_tags);
        summary.tags_excluded = summary.tags_seen - tags.len();

        let mut aggregator = Aggregator::new(orientation);

        for tag in &tags {
            let outcome = self.process_tag(tag)?;
            summary.count(&outcome);

            match outcome {
                TagOutcome::Recorded {
                    release,
                    version,
                    source_path,
                } => {
                    debug!(tag = %tag.name, %release, %version, %source_path, "recorded");
                    aggregator.record_pair(&release, &version);
                }
                TagOutcome::Skipped(reason) => {
                    debug!(tag = %tag.name, %reason, "skipped");
                }
            }
        }

        info!(task = %self.task, "{}", summary);

        Ok(ScanReport {
            aggregator,
            summary,
        })
    }
}
