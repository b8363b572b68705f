//! Scan workflow orchestration
//!
//! Keeps the end-to-end run (open repository, scan tags, order, write) apart
//! from clap so it can be driven programmatically and from tests.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::aggregate::Orientation;
use crate::config::Config;
use crate::domain::ScanSummary;
use crate::git::Git2Repository;
use crate::output::{write_table, VersionTable};
use crate::scanner::Scanner;
use crate::task::ScanTask;

/// Arguments for the scan workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanWorkflowArgs {
    pub task: ScanTask,

    /// Path to the git working copy to scan
    pub repository: PathBuf,

    /// Output file; the task's default file name when `None`
    pub output: Option<PathBuf>,

    /// Map versions to releases instead of releases to versions
    pub invert: bool,
}

impl ScanWorkflowArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.task.default_output()))
    }
}

/// Result of a successful scan workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The file that was written
    pub output: PathBuf,

    /// Number of keys in the written table
    pub entries: usize,

    pub summary: ScanSummary,
}

/// Runs one scan end to end.
///
/// Nothing is written unless the whole scan succeeds.
pub fn run_scan_workflow(args: ScanWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let repo = Git2Repository::open(&args.repository).with_context(|| {
        format!(
            "Cannot open git repository at '{}'",
            args.repository.display()
        )
    })?;

    let scanner = Scanner::new(&repo, args.task, config)?;
    let report = scanner
        .scan(Orientation::from_invert_flag(args.invert))
        .with_context(|| format!("Failed to scan {} versions", args.task))?;

    let table = VersionTable::from_aggregator(&report.aggregator);
    let output = args.output_path();
    write_table(&output, &table)
        .with_context(|| format!("Cannot write output file '{}'", output.display()))?;

    Ok(WorkflowResult {
        output,
        entries: table.len(),
        summary: report.summary,
    })
}
